//! Value representations for the Loam type engine
//!
//! - **`Value`**: the runtime value enum shared by every conversion
//! - **`Decimal`**: exact scaled-integer decimal values
//! - **`DateParts`/`TimeParts`/`DateTimeParts`**: the storage-native calendar
//!   tuples exchanged with adapters by `load` and `dump`

pub mod calendar;
pub mod decimal;
pub mod value;

pub use calendar::{DateParts, DateTimeParts, TimeParts};
pub use decimal::{Decimal, MAX_DECIMAL_SCALE};
pub use value::Value;
