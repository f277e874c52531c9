use std::io;
use std::time::Duration;

use gosms::{GetDeviceInfo, GoSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("GOSMS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_TOKEN environment variable is required",
        )
    })?;
    let device_id = std::env::var("GOSMS_DEVICE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_DEVICE_ID environment variable is required",
        )
    })?;

    let client = GoSmsClient::builder(token)
        .timeout(Duration::from_secs(10))
        .build()?;
    let info = client.get_device_info(GetDeviceInfo::new(device_id)).await?;

    println!(
        "{} ({}), battery: {}%, active: {}, charging: {}",
        info.device_name,
        info.device_id.as_str(),
        info.device_battery_state,
        info.is_active,
        info.is_charging
    );
    for sim in info.sim_list {
        println!("  slot {}: {}", sim.slot_index.value(), sim.display_name);
    }

    Ok(())
}
