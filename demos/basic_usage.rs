//! Basic usage example for the Topicsmith naming scheme

use topicsmith::{
    init_naming, render_duration_dhms, render_timestamp_or_empty, subtopic, NamingConfig,
    SegmentConfig,
};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Topicsmith Topic Naming Example");
    println!("===============================");

    // Build-time naming scheme: one segment set per broker x visibility cell
    let config = NamingConfig {
        primary_local: SegmentConfig::new()
            .with_prefix("/")
            .with_location("village")
            .with_device("heater"),
        primary_public: SegmentConfig::new()
            .with_prefix("user_4281/")
            .with_device("heater"),
        use_location: true,
        ..NamingConfig::new()
    };

    // Install once, before any topic building
    let naming = init_naming(&config);

    let status = naming.device_topic(true, true, &["status"]);
    println!("Device status topic:  {:?}", status);

    let sensor = naming.build_topic(true, true, Some("bedroom"), Some("temperature"), None);
    println!("Sensor topic:         {:?}", sensor);

    let public = naming.location_topic(true, false, &["status"]);
    println!("Public status topic:  {:?}", public);

    if let Some(topic) = status {
        println!("Subtopic:             {:?}", subtopic(&topic, "uptime"));
    }

    println!();
    println!("Uptime:               {:?}", render_duration_dhms(90061));
    println!(
        "Last error at:        {:?}",
        render_timestamp_or_empty("%d.%m.%Y %H:%M:%S", 0)
    );
}
