//! # Repository Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Command (place_order)                                                  │
//! │       │                                                                 │
//! │       │  db.collections().save(CollectionKey::Orders, &orders)          │
//! │       ▼                                                                 │
//! │  CollectionRepository                                                   │
//! │  ├── load(key, default)                                                 │
//! │  ├── save(key, value)                                                   │
//! │  ├── keys()                                                             │
//! │  └── remove(key)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  collections (key TEXT PRIMARY KEY, payload TEXT, updated_at TEXT)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod collection;
