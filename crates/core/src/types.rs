/// User ids are the identity provider's subject id, stored verbatim.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
