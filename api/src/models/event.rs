use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

/// The event registry is consumed through this one check; comments never
/// read anything else off the events table.
pub async fn exists(conn: &mut AsyncPgConnection, uid: &str) -> QueryResult<bool> {
    use crate::schema::events;
    use diesel::dsl;

    dsl::select(dsl::exists(events::table.filter(events::uid.eq(uid))))
        .get_result(conn)
        .await
}
