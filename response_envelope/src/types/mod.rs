mod meta;
pub use self::meta::{DisplayLimit, ErrorBody, PageLink, Pagination, Results};

mod payload;
pub use self::payload::Payload;
