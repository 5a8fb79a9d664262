use crate::dispatch::Dispatcher;
use crate::store::ExpenseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ExpenseStore,
    pub dispatcher: Dispatcher,
}
