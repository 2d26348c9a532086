//! Typed access to the device resources used for motion alerts.

pub mod models;

use crate::client::Connector;
use crate::error::Result;
use models::{EventTrigger, MotionDetection, MotionSchedule, VideoInputChannelList};

pub const INPUT_CHANNELS_PATH: &str = "/ISAPI/System/Video/inputs/channels";

pub fn motion_detection_path(channel: u32) -> String {
    format!("/ISAPI/System/Video/inputs/channels/{}/motionDetection", channel)
}

pub fn motion_schedule_path(channel: u32) -> String {
    format!("/ISAPI/Event/schedules/motionDetections/VMD_video{}", channel)
}

pub fn event_trigger_path(channel: u32) -> String {
    format!("/ISAPI/Event/triggers/VMD-{}", channel)
}

impl Connector {
    pub async fn get_channels(&self) -> Result<VideoInputChannelList> {
        self.get(INPUT_CHANNELS_PATH).await
    }

    pub async fn get_motion_detection(&self, channel: u32) -> Result<MotionDetection> {
        self.get(&motion_detection_path(channel)).await
    }

    pub async fn update_motion_detection(
        &self,
        channel: u32,
        motion: &MotionDetection,
    ) -> Result<()> {
        self.update(&motion_detection_path(channel), motion).await
    }

    pub async fn get_motion_schedule(&self, channel: u32) -> Result<MotionSchedule> {
        self.get(&motion_schedule_path(channel)).await
    }

    pub async fn update_motion_schedule(
        &self,
        channel: u32,
        schedule: &MotionSchedule,
    ) -> Result<()> {
        self.update(&motion_schedule_path(channel), schedule).await
    }

    pub async fn get_event_trigger(&self, channel: u32) -> Result<EventTrigger> {
        self.get(&event_trigger_path(channel)).await
    }

    pub async fn update_event_trigger(&self, channel: u32, trigger: &EventTrigger) -> Result<()> {
        self.update(&event_trigger_path(channel), trigger).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LOGIN_PATH, SESSION_PATH};
    use crate::client::UPDATE_CONTENT_TYPE;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    const CAPABILITIES_BODY: &str = r#"<SessionLoginCap version="1.0"><sessionID>s1</sessionID><challenge>c1</challenge><iterations>3</iterations><isIrreversible>false</isIrreversible><salt></salt><isSessionIDValidLongTerm opt="true,false">true</isSessionIDValidLongTerm><sessionIDVersion>2</sessionIDVersion></SessionLoginCap>"#;

    async fn connect(server: &MockServer) -> Connector {
        Mock::given(matchers::path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(CAPABILITIES_BODY))
            .mount(server)
            .await;
        Mock::given(matchers::path(SESSION_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(server)
            .await;

        Connector::new(server.address().to_string(), "admin", "secret", false)
            .await
            .unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            motion_detection_path(1),
            "/ISAPI/System/Video/inputs/channels/1/motionDetection"
        );
        assert_eq!(
            motion_schedule_path(2),
            "/ISAPI/Event/schedules/motionDetections/VMD_video2"
        );
        assert_eq!(event_trigger_path(3), "/ISAPI/Event/triggers/VMD-3");
    }

    #[tokio::test]
    async fn test_get_channels() {
        let server = MockServer::start().await;
        let connector = connect(&server).await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path(INPUT_CHANNELS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<VideoInputChannelList><VideoInputChannel><id>1</id><name>Porch</name></VideoInputChannel></VideoInputChannelList>",
            ))
            .mount(&server)
            .await;

        let channels = connector.get_channels().await.unwrap();
        assert_eq!(channels.channels.len(), 1);
        assert_eq!(channels.channels[0].name, "Porch");
    }

    #[tokio::test]
    async fn test_update_motion_detection() {
        let server = MockServer::start().await;
        let connector = connect(&server).await;

        Mock::given(matchers::method("PUT"))
            .and(matchers::path(motion_detection_path(1)))
            .and(matchers::header("content-type", UPDATE_CONTENT_TYPE))
            .and(matchers::body_string_contains("<enabled>false</enabled>"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let motion = MotionDetection {
            enabled: "false".to_string(),
            ..Default::default()
        };
        connector.update_motion_detection(1, &motion).await.unwrap();
    }

    #[tokio::test]
    async fn test_motion_schedule_read_modify_write() {
        let server = MockServer::start().await;
        let connector = connect(&server).await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/ISAPI/Event/schedules/motionDetections/VMD_video2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<Schedule><id>VMD_video2</id><eventType>VMD</eventType><videoInputChannelID>2</videoInputChannelID><TimeBlockList size="8"><TimeBlock><dayOfWeek>1</dayOfWeek><TimeRange><beginTime>00:00:00</beginTime><endTime>12:00:00</endTime></TimeRange></TimeBlock></TimeBlockList></Schedule>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(matchers::method("PUT"))
            .and(matchers::path("/ISAPI/Event/schedules/motionDetections/VMD_video2"))
            .and(matchers::header("content-type", UPDATE_CONTENT_TYPE))
            .and(matchers::body_string_contains(r#"<TimeBlockList size="8">"#))
            .and(matchers::body_string_contains("<endTime>24:00:00</endTime>"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut schedule = connector.get_motion_schedule(2).await.unwrap();
        assert_eq!(schedule.time_blocks.size.as_deref(), Some("8"));
        assert_eq!(schedule.time_blocks.blocks.len(), 1);

        schedule.time_blocks.blocks[0].time_range.end_time = "24:00:00".to_string();
        connector.update_motion_schedule(2, &schedule).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_event_trigger() {
        let server = MockServer::start().await;
        let connector = connect(&server).await;

        Mock::given(matchers::method("PUT"))
            .and(matchers::path("/ISAPI/Event/triggers/VMD-4"))
            .and(matchers::body_string_contains(
                "<notificationMethod>record</notificationMethod>",
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let trigger = EventTrigger {
            id: "VMD-4".to_string(),
            event_type: "VMD".to_string(),
            video_input_channel_id: "4".to_string(),
            notifications: models::EventTriggerNotificationList {
                items: vec![models::EventTriggerNotification {
                    id: "record-4".to_string(),
                    notification_method: "record".to_string(),
                    video_input_id: "4".to_string(),
                }],
            },
        };
        connector.update_event_trigger(4, &trigger).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_event_trigger_not_found() {
        let server = MockServer::start().await;
        let connector = connect(&server).await;

        Mock::given(matchers::path(event_trigger_path(9)))
            .respond_with(ResponseTemplate::new(404).set_body_string("<ResponseStatus/>"))
            .mount(&server)
            .await;

        let err = connector.get_event_trigger(9).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.path(), Some("/ISAPI/Event/triggers/VMD-9"));
    }
}
