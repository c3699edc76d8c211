//! Localized captions for the status display.

use serde::{Deserialize, Serialize};

/// Display language for captions and placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh", alias = "zh-CN", alias = "chinese")]
    Chinese,
    #[serde(rename = "en", alias = "en-US", alias = "english")]
    English,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Chinese),
            "en" | "en-us" | "english" => Ok(Locale::English),
            other => Err(format!("unknown locale '{other}' (expected zh or en)")),
        }
    }
}

/// Caption set for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub unknown: &'static str,
    pub song_name: &'static str,
    pub current_task: &'static str,
    pub status: &'static str,
    pub liveboost: &'static str,
    pub failed_times: &'static str,
    pub last_update: &'static str,
    pub offset: &'static str,
    pub command_log: &'static str,
    pub recent_commands: &'static str,
    pub cost: &'static str,
    pub exit_hint: &'static str,
}

const CHINESE: Labels = Labels {
    unknown: "未知",
    song_name: "歌曲名称",
    current_task: "当前任务",
    status: "程序状态",
    liveboost: "LiveBoost",
    failed_times: "失败次数",
    last_update: "最后更新",
    offset: "偏移量",
    command_log: "命令日志",
    recent_commands: "最近命令",
    cost: "耗时",
    exit_hint: "按 Ctrl+C 退出",
};

const ENGLISH: Labels = Labels {
    unknown: "unknown",
    song_name: "Song",
    current_task: "Task",
    status: "Status",
    liveboost: "LiveBoost",
    failed_times: "Failures",
    last_update: "Updated",
    offset: "Offset",
    command_log: "Command log",
    recent_commands: "Recent commands",
    cost: "cost",
    exit_hint: "Press Ctrl+C to exit",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Chinese => &CHINESE,
            Locale::English => &ENGLISH,
        }
    }
}
