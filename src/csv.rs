//! CSV rendering of the expense history

use crate::store::Expense;

trait ToCsv {
    fn header_row() -> &'static str;
    fn to_csv_row(&self) -> String;

    fn format_csv_value(s: &str) -> String {
        if s.contains(',') {
            return format!("\"{}\"", s);
        }

        s.to_string()
    }
}

pub trait VecToCsv {
    fn to_csv(&self) -> String;
}

impl<T> VecToCsv for Vec<T>
where
    T: ToCsv,
{
    fn to_csv(&self) -> String {
        let mut csv = T::header_row().to_string();
        for item in self {
            csv.push('\n');
            csv.push_str(&item.to_csv_row());
        }
        csv
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCsv {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub note: String,
}

impl From<&Expense> for ExpenseCsv {
    fn from(e: &Expense) -> Self {
        ExpenseCsv {
            date: e.date.clone(),
            amount: e.amount,
            category: e.category.clone(),
            note: e.note.clone(),
        }
    }
}

impl ToCsv for ExpenseCsv {
    fn header_row() -> &'static str {
        "date,amount,category,note"
    }

    fn to_csv_row(&self) -> String {
        let ExpenseCsv {
            date,
            amount,
            category,
            note,
        } = self;

        let category = Self::format_csv_value(category);
        let note = Self::format_csv_value(note);

        format!("{date},{amount:.2},{category},{note}")
    }
}
