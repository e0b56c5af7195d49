use super::{alert_body, FraudAlertMailer, MailerConfig};

#[test]
fn body_formats_probability_to_two_decimals() {
    let body = alert_body(87.456);
    assert!(body.contains("fraud probability of 87.46%"), "{}", body);
    assert!(body.starts_with("Dear User,"));
    assert!(body.ends_with("Fraud Detection System"));
}

#[test]
fn default_config_is_dry_run() {
    assert!(MailerConfig::default().dry_run);
}

#[tokio::test]
async fn dry_run_never_touches_the_network() {
    let mailer = FraudAlertMailer::new(MailerConfig {
        gateway_url: "http://127.0.0.1:1/unreachable".to_string(),
        ..MailerConfig::default()
    });
    mailer.send_fraud_alert("ada@example.com", 91.2).await.unwrap();
}
