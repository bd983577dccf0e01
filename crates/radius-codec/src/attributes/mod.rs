pub mod attribute;
pub mod value;

pub use attribute::Attr;
pub use value::Value;
