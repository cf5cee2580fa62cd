pub mod display;
pub mod field_matcher;
pub mod frame;
pub mod time;

pub use display::{MappingResult, ValueMapping, ValueMappings};
pub use field_matcher::{FieldMatchers, FieldRole, FieldSelection, classify_field, select_fields};
pub use frame::{DataFrame, DisplayProcessor, DisplayValue, Field, FieldType, FieldValue};
pub use time::{DEFAULT_TIME_ZONE, TimeRange, TimeZoneOption, TimeZones};
