use std::io;

use gosms::{GoSmsClient, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("GOSMS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_TOKEN environment variable is required",
        )
    })?;
    let phone = std::env::var("GOSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("GOSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the gosms example.".to_owned());

    let mut request = SendSms::new(phone, message);
    if let Ok(device_id) = std::env::var("GOSMS_DEVICE_ID") {
        request = request.device_id(device_id);
    }

    let client = GoSmsClient::new(token);
    let response = client.send_sms(request).await?;
    println!("sms id: {}", response.id.as_str());

    Ok(())
}
