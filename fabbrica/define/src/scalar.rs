//! The closed set of scalar kinds a schema field may carry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Scalar kinds understood by the generator.
///
/// The set is closed: a descriptor naming anything else is rejected when the
/// generator maps it to a target type. Parsing is case-sensitive and follows
/// the spelling used by the schema loader.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use fabbrica_define::ScalarKind;
///
/// assert_eq!(ScalarKind::from_str("BigInt").unwrap(), ScalarKind::BigInt);
/// assert_eq!(ScalarKind::DateTime.to_string(), "DateTime");
/// assert!(ScalarKind::from_str("Uuid").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum ScalarKind {
    Boolean,
    String,
    Int,
    Float,
    BigInt,
    Decimal,
    DateTime,
    Bytes,
    /// Older loaders spell this `JSON`; both spellings parse.
    #[strum(to_string = "Json", serialize = "JSON")]
    #[serde(alias = "JSON")]
    Json,
}
