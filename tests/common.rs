#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use parkwatch::core::area::AreaLogic;
use parkwatch::core::status::StatusLogic;
use parkwatch::db::pool::DbPool;
use parkwatch::models::area::Area;
use parkwatch::models::status::StatusRecord;
use chrono::Utc;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "s3cret-admin";

/// Fresh in-memory database with the full schema.
pub fn test_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

/// "Lot A" with car 10/4 and bike 5/5.
pub fn lot_a(pool: &mut DbPool) -> Area {
    let area = AreaLogic::add(pool, "Lot A", "North entrance").expect("add area");
    StatusLogic::add(pool, area.id, "car", Some(10), Some(4)).expect("add car");
    StatusLogic::add(pool, area.id, "bike", Some(5), Some(5)).expect("add bike");
    parkwatch::core::query::QueryLogic::area_by_id(pool, area.id).expect("reload area")
}

/// Build a status record without touching the database.
pub fn record(id: i64, area_id: i64, vehicle_type: &str, capacity: i64, occupied: i64) -> StatusRecord {
    StatusRecord {
        id,
        area_id,
        vehicle_type: vehicle_type.to_string(),
        capacity,
        occupied,
        created_at: Utc::now(),
    }
}

/// Build an area without touching the database.
pub fn area(id: i64, name: &str, statuses: Vec<StatusRecord>) -> Area {
    let now = Utc::now();
    Area {
        id,
        name: name.to_string(),
        location: format!("{name} street"),
        created_at: now,
        last_updated: now,
        statuses,
    }
}

pub fn count_log(pool: &DbPool, operation: &str) -> i64 {
    pool.conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = ?1",
            [operation],
            |row| row.get(0),
        )
        .expect("count log")
}

// ---------------------------
// CLI helpers
// ---------------------------

/// Isolated HOME and database path for one CLI test.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("parkwatch_tests_{}", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");

        let db = home.join("parkwatch.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// `parkwatch --db <db>` running with this HOME.
    pub fn pw(&self) -> Command {
        self.pw_on(&self.db)
    }

    /// Same HOME, different database.
    pub fn pw_on(&self, db: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("parkwatch");
        cmd.env("HOME", &self.home).args(["--db", db]);
        cmd
    }

    pub fn init(&self) {
        self.pw().args(["--test", "init"]).assert().success();
    }

    /// init + create-admin + login as admin.
    pub fn init_as_admin(&self) {
        self.init();
        self.pw()
            .args(["create-admin", ADMIN_EMAIL, "--password", ADMIN_PASSWORD])
            .assert()
            .success();
        self.pw()
            .args(["login", ADMIN_EMAIL, "--password", ADMIN_PASSWORD])
            .assert()
            .success();
    }

    pub fn stdout_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.pw().args(args).output().expect("run parkwatch");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
    }
}
