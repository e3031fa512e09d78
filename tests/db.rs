use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

mod common;

#[test]
fn test_migrated_database_accepts_connections() {
    let test_db = common::TestDb::new("test_migrated_database.db");
    let mut conn = test_db.pool().get().expect("pool yields a connection");

    // All six tables exist after migrations.
    let tables: i64 = diesel::select(sql::<BigInt>(
        "(SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
         AND name IN ('categories', 'interests', 'retailers', 'payments', \
         'onboarding_applications', 'notification_templates'))",
    ))
    .get_result(&mut conn)
    .unwrap();
    assert_eq!(tables, 6);
}
