//! ISAPI resource documents.
//!
//! Device values stay as strings: the firmware is inconsistent about how it
//! writes booleans and numbers in text nodes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "VideoInputChannelList")]
pub struct VideoInputChannelList {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "VideoInputChannel", default)]
    pub channels: Vec<VideoInputChannel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInputChannel {
    #[serde(rename = "@version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub id: String,
    #[serde(rename = "inputPort")]
    pub input_port: String,
    #[serde(rename = "videoInputEnabled")]
    pub video_input_enabled: String,
    pub name: String,
    #[serde(rename = "videoFormat")]
    pub video_format: String,
    #[serde(rename = "resDesc")]
    pub res_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "MotionDetection", default)]
pub struct MotionDetection {
    #[serde(rename = "@version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    pub enabled: String,
    #[serde(rename = "enableHighlight")]
    pub enable_highlight: String,
    #[serde(rename = "samplingInterval")]
    pub sampling_interval: String,
    #[serde(rename = "startTriggerTime")]
    pub start_trigger_time: String,
    #[serde(rename = "endTriggerTime")]
    pub end_trigger_time: String,
    #[serde(rename = "regionType")]
    pub region_type: String,
    #[serde(rename = "Grid")]
    pub grid: Grid,
    #[serde(rename = "MotionDetectionLayout")]
    pub layout: MotionDetectionLayout,
}

impl MotionDetection {
    pub fn is_enabled(&self) -> bool {
        self.enabled.trim().eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    #[serde(rename = "rowGranularity")]
    pub row_granularity: String,
    #[serde(rename = "columnGranularity")]
    pub column_granularity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionDetectionLayout {
    #[serde(rename = "sensitivityLevel")]
    pub sensitivity_level: String,
    pub layout: Layout,
    #[serde(rename = "targetType")]
    pub target_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    #[serde(rename = "gridMap")]
    pub grid_map: String,
    #[serde(rename = "RegionList")]
    pub region_list: RegionList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionList {
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "Region")]
    pub region: Region,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    pub id: String,
    #[serde(rename = "RegionCoordinatesList")]
    pub coordinates: RegionCoordinatesList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionCoordinatesList {
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "RegionCoordinates")]
    pub points: Vec<RegionCoordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionCoordinates {
    #[serde(rename = "positionX")]
    pub position_x: String,
    #[serde(rename = "positionY")]
    pub position_y: String,
}

/// Weekly arming schedule for motion detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Schedule", default)]
pub struct MotionSchedule {
    pub id: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(rename = "videoInputChannelID")]
    pub video_input_channel_id: String,
    #[serde(rename = "TimeBlockList")]
    pub time_blocks: TimeBlockList,
    #[serde(rename = "HolidayBlockList")]
    pub holiday_block_list: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBlockList {
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "TimeBlock")]
    pub blocks: Vec<TimeBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBlock {
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "TimeRange")]
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    #[serde(rename = "beginTime")]
    pub begin_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

/// Actions linked to a motion event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "EventTrigger", default)]
pub struct EventTrigger {
    pub id: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(rename = "videoInputChannelID")]
    pub video_input_channel_id: String,
    #[serde(rename = "EventTriggerNotificationList")]
    pub notifications: EventTriggerNotificationList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTriggerNotificationList {
    #[serde(rename = "EventTriggerNotification")]
    pub items: Vec<EventTriggerNotification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTriggerNotification {
    pub id: String,
    #[serde(rename = "notificationMethod")]
    pub notification_method: String,
    #[serde(rename = "videoInputID")]
    pub video_input_id: String,
}
