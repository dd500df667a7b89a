//! Player-facing text. The game is in Chinese; these strings match what the
//! server-rendered page shows so client-painted regions read the same.

pub const EMPTY_INVENTORY: &str = "背包是空的";
pub const EMPTY_CONTAINER: &str = "容器是空的";
pub const NO_SPELLS: &str = "你还未学会任何咒语";
pub const NO_SKILLS: &str = "你还未学会任何战斗技能";
pub const NO_ACHIEVEMENTS: &str = "你还未获得任何成就";

pub const USE: &str = "使用/穿戴";
pub const DISCARD: &str = "丢弃";
pub const TAKE_OUT: &str = "取出";
pub const PUT_IN: &str = "放入容器";
pub const SELECT: &str = "选择";
pub const DESELECT: &str = "取消";

pub const EMPTY_SLOT: &str = "空";
pub const HAND: &str = "手部";
pub const BODY: &str = "身体";
pub const GALLEONS: &str = "加隆";
pub const SICKLE: &str = "西可";
pub const KNUT: &str = "纳特";
pub const TIME: &str = "时间";
pub const ENEMY_HEALTH: &str = "敌人血量";
pub const CAPACITY: &str = "背包容量";

pub const MAX_SKILLS_REACHED: &str = "最多选择3个技能！";
pub const REQUEST_FAILED: &str = "请求失败，请重试";
pub const ACTION_REJECTED: &str = "操作被拒绝";

pub const ICON_BAG: &str = "🎒";
pub const ICON_WAND: &str = "🪄";
pub const ICON_SWORDS: &str = "⚔️";
pub const ICON_TROPHY: &str = "🏆";

/// `第 {page} 页 / 共 {total} 页`
pub fn page_info(page: usize, total: usize) -> String {
    format!("第 {} 页 / 共 {} 页", page, total)
}

/// Selection limit notice for limits other than the stock three.
pub fn max_skills(limit: usize) -> String {
    if limit == 3 {
        MAX_SKILLS_REACHED.to_string()
    } else {
        format!("最多选择{}个技能！", limit)
    }
}
