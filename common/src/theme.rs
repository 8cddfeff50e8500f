//! 配色テーマ
//!
//! タイトルと種別から決定的にパレットを選ぶ。乱数や保存された割り当ては使わない。

/// テーマ（背景・パネル・アクセント）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub panel: &'static str,
    pub accent: &'static str,
}

const fn theme(background: &'static str, panel: &'static str, accent: &'static str) -> Theme {
    Theme { background, panel, accent }
}

pub const PALETTE: [Theme; 8] = [
    theme("#0a1628", "#0d2847", "#22d3ee"),
    theme("#1a0a1e", "#2d1035", "#f472b6"),
    theme("#1a1008", "#2d1d0a", "#fb923c"),
    theme("#0f0a1e", "#1a1035", "#a78bfa"),
    theme("#0a1428", "#0d2040", "#60a5fa"),
    theme("#0a1a10", "#0d2d18", "#4ade80"),
    theme("#1a1010", "#2d1a1a", "#f87171"),
    theme("#1a1508", "#2d260a", "#fbbf24"),
];

/// 文字列ハッシュ（バケット選択用、暗号用途ではない）
///
/// UTF-16コード単位ごとに `h * 31 + c` を32bit符号付きで折り返し計算し、絶対値を返す。
pub fn hash_str(text: &str) -> u32 {
    let h = text.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    h.unsigned_abs()
}

/// (タイトル, 種別) に対応するパレット番号
pub fn theme_index(title: &str, work_type: &str) -> usize {
    let key = format!("{}{}", title, work_type);
    hash_str(&key) as usize % PALETTE.len()
}

pub fn theme_for(title: &str, work_type: &str) -> Theme {
    PALETTE[theme_index(title, work_type)]
}

/// 3色のCSSグラデーション
pub fn gradient_for(title: &str, work_type: &str) -> String {
    let t = theme_for(title, work_type);
    format!(
        "linear-gradient(135deg, {} 0%, {} 30%, {} 100%)",
        t.background, t.panel, t.accent
    )
}

pub fn accent_for(title: &str, work_type: &str) -> &'static str {
    theme_for(title, work_type).accent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_str_known_values() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), 97);
        assert_eq!(hash_str("ab"), 97 * 31 + 98);
        assert_eq!(hash_str("abc"), 96354);
    }

    #[test]
    fn test_hash_str_wraps_without_panic() {
        let long = "portfolio ".repeat(200);
        assert_eq!(hash_str(&long), hash_str(&long));
    }

    #[test]
    fn test_hash_str_utf16_units() {
        // サロゲートペアは2単位として計算される
        let expected = {
            let h = 0xD83Ci32;
            (h * 31 + 0xDFA8).unsigned_abs()
        };
        assert_eq!(hash_str("🎨"), expected);
    }

    #[test]
    fn test_theme_is_deterministic() {
        let a = gradient_for("Kong Interactive", "Installation");
        let b = gradient_for("Kong Interactive", "Installation");
        assert_eq!(a, b);
        assert_eq!(
            accent_for("Kong Interactive", "Installation"),
            accent_for("Kong Interactive", "Installation")
        );
    }

    #[test]
    fn test_theme_index_in_range() {
        let pairs = [
            ("", ""),
            ("Data Mask", "AI / Performance"),
            ("Khwan", "Dance"),
            ("ZER01NE", "Exhibition"),
            ("ขวัญ", "การแสดง"),
        ];
        for (title, work_type) in pairs {
            assert!(theme_index(title, work_type) < PALETTE.len());
        }
    }

    #[test]
    fn test_empty_inputs_use_first_theme() {
        assert_eq!(theme_index("", ""), 0);
        assert_eq!(accent_for("", ""), "#22d3ee");
    }

    #[test]
    fn test_gradient_format() {
        // "a" → 97 % 8 = 1
        assert_eq!(
            gradient_for("a", ""),
            "linear-gradient(135deg, #1a0a1e 0%, #2d1035 30%, #f472b6 100%)"
        );
        assert_eq!(accent_for("", "a"), "#f472b6");
    }
}
