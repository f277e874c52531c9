use std::io;

use gosms::{GoSmsClient, ListSms};

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
    let limit = std::env::var("GOSMS_LIMIT")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(10);

    let mut request = ListSms::new(limit);
    if let Ok(search) = std::env::var("GOSMS_SEARCH") {
        request = request.search(search);
    }

    let client = GoSmsClient::new(token);
    let response = client.list_sms(request).await?;
    println!(
        "total: {}, limit: {}, offset: {}",
        response.pagination.total_records, response.pagination.limit, response.pagination.offset
    );
    for sms in response.sms_list {
        println!(
            "{} {} {} {:?}",
            sms.id.as_str(),
            sms.phone_number,
            sms.message_status,
            sms.to_sim
        );
    }

    Ok(())
}
