pub mod cloth_table;
pub mod number_field;
pub mod result_card;

pub use cloth_table::ClothTable;
pub use number_field::{NumberField, RequiredField};
pub use result_card::ResultCard;
