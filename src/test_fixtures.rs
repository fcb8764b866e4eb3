//! Throwaway Sqlite news databases for tests.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};

use crate::database::{DatabaseTarget, QueryExecutor};

const SCHEMA: [&str; 4] = [
    "CREATE TABLE authors (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        bio TEXT
    )",
    "CREATE TABLE articles (
        id INTEGER PRIMARY KEY,
        author INTEGER NOT NULL REFERENCES authors(id),
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        lead TEXT,
        body TEXT
    )",
    "CREATE TABLE log (
        id INTEGER PRIMARY KEY,
        path TEXT NOT NULL,
        ip TEXT,
        method TEXT,
        status TEXT NOT NULL,
        time TEXT NOT NULL
    )",
    "CREATE TABLE log_stats (
        date TEXT NOT NULL,
        total INTEGER NOT NULL,
        errors INTEGER NOT NULL,
        error_percentage REAL NOT NULL
    )",
];

pub struct NewsDb {
    path: PathBuf,
}

impl NewsDb {
    pub async fn create(label: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("news-reports-{label}-{nanos}.sqlite"));
        let db = Self { path };

        let mut conn = db.writer().await;
        for ddl in SCHEMA {
            sqlx::query(ddl)
                .execute(&mut conn)
                .await
                .expect("schema should apply");
        }
        conn.close().await.expect("connection should close");

        db
    }

    async fn writer(&self) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .connect()
            .await
            .expect("fixture database should open")
    }

    async fn exec(&self, sql: &str) {
        let mut conn = self.writer().await;
        sqlx::query(sql)
            .execute(&mut conn)
            .await
            .expect("fixture statement should run");
        conn.close().await.expect("connection should close");
    }

    /// Executor reading the fixture the same way the binary would.
    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(DatabaseTarget::Sqlite(
            SqliteConnectOptions::new()
                .filename(&self.path)
                .read_only(true),
        ))
    }

    pub async fn add_author(&self, id: i64, name: &str) {
        let mut conn = self.writer().await;
        sqlx::query("INSERT INTO authors (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&mut conn)
            .await
            .expect("author insert");
        conn.close().await.expect("connection should close");
    }

    pub async fn add_article(&self, slug: &str, title: &str, author: i64) {
        let mut conn = self.writer().await;
        sqlx::query("INSERT INTO articles (author, title, slug) VALUES ($1, $2, $3)")
            .bind(author)
            .bind(title)
            .bind(slug)
            .execute(&mut conn)
            .await
            .expect("article insert");
        conn.close().await.expect("connection should close");
    }

    /// Logs `count` successful requests for `path`.
    pub async fn add_hits(&self, path: &str, count: usize) {
        let mut conn = self.writer().await;
        for _ in 0..count {
            sqlx::query(
                "INSERT INTO log (path, ip, method, status, time)
                VALUES ($1, '198.51.100.7', 'GET', '200 OK', '2024-07-04 10:00:00')",
            )
            .bind(path)
            .execute(&mut conn)
            .await
            .expect("log insert");
        }
        conn.close().await.expect("connection should close");
    }

    pub async fn add_article_views(&self, slug: &str, count: usize) {
        self.add_hits(&format!("/article/{slug}"), count).await;
    }

    pub async fn add_log_stats(&self, date: &str, total: i64, errors: i64, error_percentage: f64) {
        let mut conn = self.writer().await;
        sqlx::query(
            "INSERT INTO log_stats (date, total, errors, error_percentage) VALUES ($1, $2, $3, $4)",
        )
        .bind(date)
        .bind(total)
        .bind(errors)
        .bind(error_percentage)
        .execute(&mut conn)
        .await
        .expect("log_stats insert");
        conn.close().await.expect("connection should close");
    }

    pub async fn drop_table(&self, table: &str) {
        self.exec(&format!("DROP TABLE {table}")).await;
    }
}

impl Drop for NewsDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
