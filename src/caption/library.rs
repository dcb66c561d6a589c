use rand::Rng;

use crate::classify::categorizer::{Category, classify_bytes};

/// Caption used before any suggestion has been made.
pub const FALLBACK_CAPTION: &str = "美好的一天";

const PORTRAIT: [&str; 15] = [
    "胶片里的碎碎念",
    "复古氛围感拉满",
    "定格温柔瞬间",
    "笑脸收藏家",
    "镜头下的美好",
    "今日份甜度",
    "捕捉一只小可爱",
    "眼里有光",
    "主角光环",
    "温柔了岁月",
    "私藏的快乐",
    "不被定义的我",
    "像风一样自由",
    "复古女孩",
    "盐系少年",
];

const SCENERY: [&str; 15] = [
    "风与光的邂逅",
    "山河皆入画",
    "落日贩卖机",
    "街角慢镜头",
    "自然的诗篇",
    "去有风的地方",
    "治愈系风景",
    "天空的来信",
    "云朵的梦",
    "城市漫游记",
    "绿色的呼吸",
    "阳光的味道",
    "远方不远",
    "在此刻停留",
    "收集地图",
];

const FOOD: [&str; 15] = [
    "舌尖复古记",
    "烟火气限定",
    "美食拍立得",
    "碳水治愈局",
    "一口复古味",
    "好胃口",
    "今日份投喂",
    "吃货的修养",
    "热气腾腾",
    "味蕾旅行",
    "快乐水",
    "甜品治愈一切",
    "深夜食堂",
    "早安晨之美",
    "味觉记忆",
];

const LIFE: [&str; 15] = [
    "旧时光里的日常",
    "慢生活碎片",
    "岁月温柔以待",
    "日常小浪漫",
    "复古生活志",
    "平凡的一天",
    "生活需要仪式感",
    "简单的快乐",
    "宅家日记",
    "周末愉快",
    "好心情营业",
    "生活碎片",
    "记录此刻",
    "温暖的小事",
    "时光慢递",
];

const CREATIVE: [&str; 15] = [
    "脑洞拍立得",
    "色彩狂欢记",
    "萌物定格术",
    "静物复古感",
    "个性胶片秀",
    "奇奇怪怪",
    "可可爱爱",
    "灵感碎片",
    "造梦空间",
    "独特视角",
    "不一样的烟火",
    "打破常规",
    "艺术细胞",
    "色彩收集",
    "光影游戏",
];

const GENERAL: [&str; 15] = [
    "Retro 瞬间",
    "胶片不打烊",
    "时光定格机",
    "复古小美好",
    "咔嚓！旧时光",
    "美好的一天",
    "时光印记",
    "留住此刻",
    "记忆存档",
    "未完待续",
    "独家记忆",
    "想去见你",
    "很高兴遇见你",
    "保持热爱",
    "奔赴山海",
];

/// All captions for `category`, in library order.
pub fn captions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Portrait => &PORTRAIT,
        Category::Scenery => &SCENERY,
        Category::Food => &FOOD,
        Category::Life => &LIFE,
        Category::Creative => &CREATIVE,
        Category::General => &GENERAL,
    }
}

/// Uniformly pick one caption for `category`.
pub fn caption_for<R: Rng + ?Sized>(category: Category, rng: &mut R) -> &'static str {
    let list = captions(category);
    list[rng.random_range(0..list.len())]
}

/// A classified category together with the caption picked for it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptionSuggestion {
    /// Category the caption was drawn from.
    pub category: Category,
    /// Caption text.
    pub text: String,
}

impl Default for CaptionSuggestion {
    fn default() -> Self {
        Self {
            category: Category::General,
            text: FALLBACK_CAPTION.to_owned(),
        }
    }
}

/// Classify encoded image bytes, then look up a caption for the result.
pub fn suggest_caption<R: Rng + ?Sized>(bytes: &[u8], rng: &mut R) -> CaptionSuggestion {
    let category = classify_bytes(bytes, rng);
    CaptionSuggestion {
        category,
        text: caption_for(category, rng).to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/library.rs"]
mod tests;
