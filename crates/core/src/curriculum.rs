//! Static curriculum catalog: tracks and their ordered milestones.
//!
//! The catalog is inserted once by the seed binary and never modified by
//! user actions.

/// Slug of the "Build Your Own Database" track.
pub const TRACK_BUILD_YOUR_OWN_DATABASE: &str = "build-your-own-database";

pub const MILESTONE_KV_STORE: &str = "kv-store";
pub const MILESTONE_STORAGE_ENGINE: &str = "storage-engine";
pub const MILESTONE_BTREE_INDEXING: &str = "btree-indexing";
pub const MILESTONE_QUERY_PARSER: &str = "query-parser";
pub const MILESTONE_TRANSACTIONS: &str = "transactions";

#[derive(Debug)]
pub struct TrackSeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub milestones: &'static [MilestoneSeed],
}

#[derive(Debug)]
pub struct MilestoneSeed {
    /// 1-based position within the track.
    pub position: i32,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CATALOG: &[TrackSeed] = &[TrackSeed {
    slug: TRACK_BUILD_YOUR_OWN_DATABASE,
    name: "Build Your Own Database",
    description: "Learn computer science by building a database from scratch in Go.",
    milestones: &[
        MilestoneSeed {
            position: 1,
            slug: MILESTONE_KV_STORE,
            title: "Simple Key-Value Store",
            description: "Build a key-value store that persists data to disk.",
        },
        MilestoneSeed {
            position: 2,
            slug: MILESTONE_STORAGE_ENGINE,
            title: "Storage Engine",
            description: "Implement a log-structured storage engine with compaction.",
        },
        MilestoneSeed {
            position: 3,
            slug: MILESTONE_BTREE_INDEXING,
            title: "B-Tree Indexing",
            description: "Add B-tree indexing for efficient key lookups.",
        },
        MilestoneSeed {
            position: 4,
            slug: MILESTONE_QUERY_PARSER,
            title: "Query Parser",
            description: "Build a SQL-like query parser and executor.",
        },
        MilestoneSeed {
            position: 5,
            slug: MILESTONE_TRANSACTIONS,
            title: "Transactions",
            description: "Implement ACID transactions with write-ahead logging.",
        },
    ],
}];
