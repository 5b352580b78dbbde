//! Per-article rule modules
//!
//! One module per Enforcement Order article, each an ordered guarded-rule
//! chain instantiated as a static [`ArticleModule`]. The set covers the
//! recurring rule shapes: use-category tiers, area multipliers, per-floor
//! scans, capacity rules, hazard flags, and structure gates. Adding an
//! article is adding a file and a dispatch arm.

pub mod article10;
pub mod article11;
pub mod article13;
pub mod article21;
pub mod article22;
pub mod article23;
pub mod article24;
pub mod article27;

use crate::article::ArticleId;
use crate::module::ArticleModule;

/// Rule module for an article.
pub fn module_for(article: ArticleId) -> &'static ArticleModule {
    match article {
        ArticleId::Article10 => &article10::MODULE,
        ArticleId::Article11 => &article11::MODULE,
        ArticleId::Article13 => &article13::MODULE,
        ArticleId::Article21 => &article21::MODULE,
        ArticleId::Article22 => &article22::MODULE,
        ArticleId::Article23 => &article23::MODULE,
        ArticleId::Article24 => &article24::MODULE,
        ArticleId::Article27 => &article27::MODULE,
    }
}
