//! Module listing download
//!
//! The site's module catalogue is maintained in another repository. It is
//! fetched as a YAML file and stored untouched in the site's data folder.

use crate::config::ModulesConfig;
use crate::diagnostics::{EtchError, EtchResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Downloads the module listing into the site's data folder
#[derive(Debug, Clone)]
pub struct ModulesFetcher {
    url: String,
    destination: PathBuf,
}

impl ModulesFetcher {
    /// Fetch `url` into `destination`
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
        }
    }

    /// Use the `[modules]` config table
    pub fn from_config(config: &ModulesConfig) -> Self {
        Self::new(&config.url, &config.output)
    }

    /// Source URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Destination file
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Download once and overwrite the destination with the response body.
    /// Returns the number of bytes written.
    pub fn fetch(&self) -> EtchResult<usize> {
        info!("Downloading modules from {}", self.url);

        let response = reqwest::blocking::get(&self.url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(EtchError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        write_listing(&self.destination, &body)?;
        info!("Saved {}", self.destination.display());
        Ok(body.len())
    }
}

/// Write the listing, creating the parent folder when needed
fn write_listing(destination: &Path, body: &[u8]) -> EtchResult<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(destination, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MODULES_URL;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const LISTING: &str = "- name: moleculer-db\n  link: https://github.com/moleculerjs/moleculer-db\n";

    /// Answer a single request with a canned HTTP/1.1 response
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/site_modules.yml", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/yaml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (url, handle)
    }

    #[test]
    fn test_from_config() {
        let fetcher = ModulesFetcher::from_config(&ModulesConfig::default());
        assert_eq!(fetcher.url(), DEFAULT_MODULES_URL);
        assert_eq!(
            fetcher.destination(),
            Path::new("source/_data/modules.yml")
        );
    }

    #[test]
    fn test_write_listing_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("source/_data/modules.yml");
        write_listing(&destination, b"- name: moleculer-db\n").unwrap();
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "- name: moleculer-db\n"
        );

        write_listing(&destination, b"[]\n").unwrap();
        assert_eq!(fs::read_to_string(&destination).unwrap(), "[]\n");
    }

    #[test]
    fn test_fetch_unreachable_host() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("modules.yml");
        let fetcher = ModulesFetcher::new("http://127.0.0.1:1/site_modules.yml", &destination);

        assert!(matches!(fetcher.fetch(), Err(EtchError::Http(_))));
        assert!(!destination.exists());
    }

    #[test]
    fn test_fetch_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("source/_data/modules.yml");
        write_listing(&destination, b"- name: outdated\n").unwrap();

        let (url, server) = serve_once("200 OK", LISTING);
        let written = ModulesFetcher::new(url, &destination).fetch().unwrap();
        server.join().unwrap();

        assert_eq!(written, LISTING.len());
        assert_eq!(fs::read(&destination).unwrap(), LISTING.as_bytes());
    }

    #[test]
    fn test_fetch_error_status_keeps_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("modules.yml");
        write_listing(&destination, LISTING.as_bytes()).unwrap();

        let (url, server) = serve_once("404 Not Found", "Not Found");
        let result = ModulesFetcher::new(url, &destination).fetch();
        server.join().unwrap();

        assert!(matches!(
            result,
            Err(EtchError::HttpStatus { status: 404, .. })
        ));
        assert_eq!(fs::read_to_string(&destination).unwrap(), LISTING);
    }
}
