//! Hand URLs to the platform's default browser
use std::io;
use std::process::Stdio;

use tokio::process::Command;
use url::Url;

/// Launch the browser without waiting for it. Only web URLs are accepted.
pub fn open_in_browser(url: &Url) -> io::Result<()> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a web URL: {url}"),
        ));
    }

    let mut command = launcher(url.as_str());
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // The child is reaped by tokio once it exits
    command.spawn()?;
    Ok(())
}

fn launcher(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    }
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}
