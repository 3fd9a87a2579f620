//! Rule-based keyword tagging for fashion items.
//!
//! The publish pipeline assigns classification tags without any external
//! service: keyword rules are matched against the item's name and shop
//! name, and untagged dimensions get a sensible default (the catalog skews
//! heavily toward womens-audience costume items).
//!
//! Tagging only fills dimensions that are still empty; curated values in
//! the source document are never overwritten.

use regex::Regex;

use crate::models::FashionItem;

/// Default audience category when no rule matches.
const DEFAULT_CATEGORY: &str = "womens";

/// Default taste tag when no rule matches.
const DEFAULT_TASTE: &str = "casual";

/// Default item type when no rule matches.
const DEFAULT_TYPE: &str = "costume";

/// Keyword patterns per taste slug.
const TASTE_RULES: &[(&str, &[&str])] = &[
    (
        "cyber",
        &[
            "サイバー", "パンク", "ネオン", "グロー", "光る", "ホログラム", "メカ",
            "cyber", "punk", "neon", "glow", "mecha", "近未来", "電脳",
        ],
    ),
    (
        "street",
        &[
            "ストリート", "パーカー", "スニーカー", "デニム", "グラフィティ",
            "street", "hoodie", "sneaker",
        ],
    ),
    (
        "wa-modern",
        &[
            "和風", "着物", "和服", "和モダン", "和装", "袴", "浴衣", "振袖", "羽織",
            "japanese", "kimono", "wa-",
        ],
    ),
    (
        "ryousangata",
        &["量産型", "量産", "ガーリー", "リボン", "フリル", "パール"],
    ),
    ("jirai", &["地雷", "じらい", "病み", "黒×ピンク"]),
    (
        "fantasy",
        &[
            "ファンタジー", "騎士", "魔法", "ドラゴン", "エルフ", "魔女", "鎧",
            "fantasy", "knight", "magic", "中世", "異世界",
        ],
    ),
    (
        "casual",
        &["カジュアル", "デイリー", "普段着", "Tシャツ", "ジーンズ", "casual", "daily"],
    ),
    (
        "gothic",
        &[
            "ゴシック", "ゴスロリ", "ロリータ", "ヴィクトリアン",
            "gothic", "lolita", "goth",
        ],
    ),
    (
        "pop",
        &[
            "ポップ", "カラフル", "原宿", "ゆめかわ", "パステル", "デコラ",
            "kawaii", "pop", "colorful",
        ],
    ),
];

/// Keyword patterns per item type slug.
const TYPE_RULES: &[(&str, &[&str])] = &[
    (
        "avatar",
        &["アバター", "avatar", "キャラクター", "3Dモデル", "character", "素体"],
    ),
    (
        "costume",
        &[
            "衣装", "ドレス", "ジャケット", "スカート", "コート", "ワンピース",
            "セーター", "シャツ", "ブラウス", "水着", "ニット",
            "costume", "outfit", "clothing", "wear",
        ],
    ),
    (
        "accessory",
        &[
            "アクセサリー", "ヘッドドレス", "チョーカー", "イヤリング", "ネックレス",
            "帽子", "メガネ", "ブーツ", "ハイヒール", "翼", "ウィング",
            "accessory", "hair", "hat", "glasses",
        ],
    ),
    (
        "texture",
        &["テクスチャ", "マテリアル", "改変素材", "texture", "material", "shader", "PSD"],
    ),
    (
        "tool",
        &["ツール", "ギミック", "システム", "tool", "system", "script", "prefab", "OSC"],
    ),
    (
        "pose",
        &["ポーズ", "アニメーション", "モーション", "ダンス", "pose", "animation", "motion", "emote"],
    ),
];

/// Keyword patterns per audience category slug. Avatar base names count as
/// audience signals the same way explicit keywords do.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "mens",
        &["メンズ", "男性", "男の子", "ボーイ", "boy", "紳士", "リーファ", "ゼン"],
    ),
    (
        "womens",
        &[
            "レディース", "女性", "女の子", "ガール", "girl", "舞夜", "桔梗",
            "マヌカ", "萌", "シフォン", "セレスティア", "薄荷", "ルシナ",
        ],
    ),
    (
        "kids",
        &["キッズ", "子供", "こども", "ちび", "kids", "small", "ラスク", "ぽこ"],
    ),
];

/// Compiled rule set.
///
/// Each slug's keyword list compiles to one case-insensitive alternation.
pub struct Tagger {
    taste: Vec<(String, Regex)>,
    kind: Vec<(String, Regex)>,
    category: Vec<(String, Regex)>,
}

fn compile(rules: &[(&str, &[&str])]) -> Result<Vec<(String, Regex)>, regex::Error> {
    rules
        .iter()
        .map(|(slug, patterns)| {
            let joined = patterns
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let re = Regex::new(&format!("(?i){joined}"))?;
            Ok(((*slug).to_string(), re))
        })
        .collect()
}

impl Tagger {
    /// Compiles the built-in rule set.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            taste: compile(TASTE_RULES)?,
            kind: compile(TYPE_RULES)?,
            category: compile(CATEGORY_RULES)?,
        })
    }

    /// All taste slugs whose keywords appear in `text`.
    #[must_use]
    pub fn taste_tags(&self, text: &str) -> Vec<String> {
        self.taste
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(slug, _)| slug.clone())
            .collect()
    }

    /// First matching item type slug, if any.
    #[must_use]
    pub fn item_type(&self, text: &str) -> Option<String> {
        self.kind
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(slug, _)| slug.clone())
    }

    /// First matching audience category slug, if any.
    #[must_use]
    pub fn category(&self, text: &str) -> Option<String> {
        self.category
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(slug, _)| slug.clone())
    }

    /// Fills the empty classification dimensions of `item` in place.
    ///
    /// Returns true when any dimension was filled.
    pub fn tag_item(&self, item: &mut FashionItem) -> bool {
        let text = format!("{} {}", item.name, item.shop_name);
        let mut changed = false;

        if item.category.is_none() {
            item.category = Some(
                self.category(&text)
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            );
            changed = true;
        }
        if item.taste.is_empty() {
            let mut tastes = self.taste_tags(&text);
            if tastes.is_empty() {
                tastes.push(DEFAULT_TASTE.to_string());
            }
            item.taste = tastes;
            changed = true;
        }
        if item.item_type.is_none() {
            item.item_type = Some(
                self.item_type(&text)
                    .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            );
            changed = true;
        }

        changed
    }

    /// Tags every item in the list, returning how many were changed.
    pub fn tag_all(&self, items: &mut [FashionItem]) -> usize {
        items
            .iter_mut()
            .map(|item| self.tag_item(item))
            .filter(|&changed| changed)
            .count()
    }
}
