use crate::{
    SystemStatus,
    discord::{embed::Field, notification::Notification},
};

/// Presentation of the IP change alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertStyle {
    pub title: String,
    pub content: String,
    /// `#RRGGBB`; anything else renders black.
    pub color: String,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self {
            title: String::from("URGENT!!! - System - IP address Change"),
            content: String::from(
                "The public IP address of your server has changed. Here is the relevant info:",
            ),
            color: String::from("#a80000"),
        }
    }
}

#[must_use]
pub fn ip_change_notification(status: &SystemStatus, style: &AlertStyle) -> Notification {
    let mut notification = Notification::new();
    notification.set_color(&style.color);
    notification.set_title(&style.title);
    notification.set_content(&style.content);

    notification.add_field(Field::new("New IP", &status.new_ip));
    notification.add_field(Field::new("Apache2 Status", &status.apache_status));
    notification.add_field(Field::new("System Updates", &status.update_status));
    notification.add_field(Field::new("System Time", &status.system_time));
    notification.add_field(Field::new("Domain Status", &status.domain_status));

    notification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::embed::Color;

    fn status() -> SystemStatus {
        SystemStatus {
            new_ip: String::from("1.2.3.4"),
            apache_status: String::from("running"),
            update_status: String::from("ok"),
            system_time: String::from("2024-01-01T00:00:00Z"),
            domain_status: String::from("active"),
        }
    }

    #[test]
    fn fields_in_display_order() {
        let n = ip_change_notification(&status(), &AlertStyle::default());
        let pairs: Vec<(&str, &str)> = n
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("New IP", "1.2.3.4"),
                ("Apache2 Status", "running"),
                ("System Updates", "ok"),
                ("System Time", "2024-01-01T00:00:00Z"),
                ("Domain Status", "active"),
            ]
        );
        assert!(n.fields().iter().all(|f| !f.inline));
    }

    #[test]
    fn default_style() {
        let n = ip_change_notification(&status(), &AlertStyle::default());
        assert_eq!(n.title(), "URGENT!!! - System - IP address Change");
        assert!(n.content().starts_with("The public IP address of your server has changed"));
        assert_eq!(n.color().to_discord(), 11_010_048);
    }

    #[test]
    fn bad_style_color_renders_black() {
        let style = AlertStyle {
            color: String::from("crimson"),
            ..AlertStyle::default()
        };
        let n = ip_change_notification(&status(), &style);
        assert_eq!(n.color(), Color::BLACK);
    }
}
