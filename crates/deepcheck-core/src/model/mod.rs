pub mod category;
pub mod value;

pub use category::Category;
pub use value::{format_number, Date, ErrorValue, FunctionRef, Object, Value};
