use anyhow::Result;
use ltcwatch::audio;

/// Print the capture devices the way `--device` indexes them. Enumeration
/// failure degrades to an empty listing so `--list` still exits cleanly.
pub(crate) fn list_input_devices() -> Result<()> {
    let devices = audio::input_device_names().unwrap_or_else(|err| {
        eprintln!("Failed to list audio input devices: {err}");
        Vec::new()
    });

    if devices.is_empty() {
        println!("No audio input devices detected.");
    } else {
        for (index, name) in devices.iter().enumerate() {
            println!("Device {index}: {name}");
        }
    }
    Ok(())
}
