#![warn(missing_docs)]
//! richtext-core - Headless Paragraph/Run Text Engine
//!
//! # Overview
//!
//! `richtext-core` locates occurrences of a search string inside a
//! paragraph's text and performs structural replace/format operations that
//! stay correct even though the text is physically fragmented into
//! independently styled spans ("runs"). A match found against the *logical*
//! concatenated text of a paragraph is translated into *physical*
//! run-relative spans, and a replacement rewrites those spans in place
//! without corrupting sibling runs.
//!
//! # Core Features
//!
//! - **Aggregate Text View**: logical paragraph text plus a cumulative
//!   length table, recomputed on demand
//! - **Literal Search**: escaped-needle matching with ascending,
//!   non-overlapping character-offset spans
//! - **Offset Mapping**: character span → (run span, intra-run offsets) via
//!   binary search, O(log R) per match
//! - **Run Splicing**: multi-run replace that trims the boundary runs and
//!   clears interior runs, leaving styles untouched
//! - **Safe Batching**: rightmost-first application so earlier edits never
//!   invalidate later match offsets
//! - **Formatting**: tri-state run/paragraph options where "unset" and
//!   "explicitly false" are distinct
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Document / Cell (collection fan-out)       │  ← Thin providers
//! ├─────────────────────────────────────────────┤
//! │  Batch Driver (descending sort-then-apply)  │  ← Ordering discipline
//! ├─────────────────────────────────────────────┤
//! │  Run Splicer (prefix/replacement/suffix)    │  ← In-place mutation
//! ├─────────────────────────────────────────────┤
//! │  Offset Mapper (binary search over table)   │  ← Char → run offsets
//! ├─────────────────────────────────────────────┤
//! │  Substring Locator (escaped literal regex)  │  ← Aggregate-text search
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use richtext_core::{Paragraph, replace_all};
//!
//! let mut paragraph = Paragraph::with_text("Hello, world!");
//! paragraph.add_run(" Goodbye, world!");
//!
//! let count = replace_all(&mut paragraph, "world", "everyone").unwrap();
//!
//! assert_eq!(count, 2);
//! assert_eq!(paragraph.text(), "Hello, everyone! Goodbye, everyone!");
//! ```
//!
//! Match records are transient: they are recomputed from live paragraph
//! state and become stale the moment any run in the paragraph is edited.
//! Never hold a [`RunMatch`] across a mutation; re-locate instead.
//!
//! # Module Description
//!
//! - [`search`] - literal substring locator over aggregate text
//! - [`matching`] - match records, offset mapper, position ordering
//! - [`replace`] - run splicer and the batch replace driver
//! - [`paragraph`] - paragraph model, aggregate view, styled-run builder
//! - [`run`] - run model and character-level formatting
//! - [`format`] - tri-state formatting option types
//! - [`document`] - in-memory document provider (body/headers/footers)
//! - [`table`] - table-cell formatting consumer
//!
//! # Unicode
//!
//! All public offsets are **character** offsets, never bytes. Run lengths,
//! occurrence spans, and intra-run offsets all count `char`s, so mixed
//! ASCII/CJK content maps correctly across run boundaries.

pub mod document;
pub mod error;
pub mod format;
pub mod matching;
pub mod paragraph;
pub mod replace;
pub mod run;
pub mod search;
pub mod table;

pub use document::Document;
pub use error::Error;
pub use format::{Alignment, CellFormat, ParagraphFormat, Rgb, RunFormat};
pub use matching::{ParagraphMatch, RunMatch, find_in_paragraph, find_in_runs, map_occurrence};
pub use paragraph::{Paragraph, ParagraphId};
pub use replace::{replace_all, splice, splice_all};
pub use run::Run;
pub use search::{Occurrence, find_all};
pub use table::Cell;
