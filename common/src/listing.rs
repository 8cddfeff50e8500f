//! 一覧表示用の派生データ
//!
//! 正規化済みの `Work` から、一覧ページが使う属性（URL・配色・カテゴリ・
//! 説明文HTML）をまとめた `WorkCard` を作る。並び替えと絞り込みもここで行う。

use crate::normalizer::{has_detail_page, primary_category, work_url};
use crate::render::render_description;
use crate::theme::{accent_for, gradient_for};
use crate::types::Work;
use serde::Serialize;

impl Work {
    pub fn gradient(&self) -> String {
        gradient_for(&self.title, &self.work_type)
    }

    pub fn accent(&self) -> &'static str {
        accent_for(&self.title, &self.work_type)
    }

    pub fn category(&self) -> &str {
        primary_category(&self.work_type)
    }

    pub fn url(&self) -> String {
        work_url(self)
    }

    pub fn has_detail_page(&self) -> bool {
        has_detail_page(self)
    }

    pub fn description_html(&self) -> String {
        render_description(&self.description)
    }

    pub fn is_published(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("published")
    }
}

/// 一覧表示用の作品カード
#[derive(Debug, Clone, Serialize)]
pub struct WorkCard {
    #[serde(flatten)]
    pub work: Work,
    pub url: String,
    pub gradient: String,
    pub accent: String,
    pub category: String,
    pub has_detail_page: bool,
    pub description_html: String,
}

impl WorkCard {
    pub fn from_work(work: Work) -> Self {
        Self {
            url: work.url(),
            gradient: work.gradient(),
            accent: work.accent().to_string(),
            category: work.category().to_string(),
            has_detail_page: work.has_detail_page(),
            description_html: work.description_html(),
            work,
        }
    }
}

/// 公開状態の作品のみ
pub fn published_works(works: &[Work]) -> Vec<&Work> {
    works.iter().filter(|w| w.is_published()).collect()
}

/// 注目作品（公開 + featured）を表示順に並べる
///
/// 表示順が同じ作品はシート上の順序を保つ。
pub fn featured_works(works: &[Work]) -> Vec<&Work> {
    let mut featured: Vec<&Work> = works
        .iter()
        .filter(|w| w.featured && w.is_published())
        .collect();
    featured.sort_by_key(|w| w.featured_order);
    featured
}

/// 主カテゴリの一覧（初出順、重複なし）
pub fn categories(works: &[Work]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for category in works.iter().map(Work::category) {
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
