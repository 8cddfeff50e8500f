//! Portfolio Common Library
//!
//! スプレッドシートから取得した作品データの解析・正規化・表示用属性の生成。
//! I/Oを持たない純粋なロジックのみを置く。

pub mod csv;
pub mod error;
pub mod image;
pub mod listing;
pub mod normalizer;
pub mod render;
pub mod text;
pub mod theme;
pub mod types;

pub use csv::{find_col, parse_csv, sanitize_header};
pub use error::{Error, Result};
pub use image::{drive_to_image, img_url, is_direct_image, resolve_image, IMG_BASE};
pub use listing::{categories, featured_works, published_works, WorkCard};
pub use normalizer::{
    has_detail_page, known_work_slug, normalize_sheet, normalize_work, primary_category, work_url,
    KnownWork, KNOWN_WORKS,
};
pub use render::{esc_html, render_description};
pub use text::{encode_component, is_truthy, to_slug};
pub use theme::{accent_for, gradient_for, hash_str, theme_for, theme_index, Theme, PALETTE};
pub use types::{RawRecord, RawRow, SheetResult, Work, DEFAULT_FEATURED_ORDER, DEFAULT_STATUS};
