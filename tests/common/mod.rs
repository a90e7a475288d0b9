#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

/// Helper struct to run docjump commands against an isolated config file
pub struct DocJumpTest {
    pub temp_dir: TempDir,
    envs: Vec<(String, String)>,
}

impl DocJumpTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DocJumpTest {
            temp_dir,
            envs: Vec::new(),
        }
    }

    /// Set an extra environment variable for every command
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_docjump"));
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("DOCJUMP_CONFIG", self.config_path())
            .env_remove("DOCJUMP_SEARCH_URL")
            .env_remove("DOCJUMP_DOCS_URL")
            .env_remove("DOCJUMP_LOG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to execute docjump command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

/// Minimal HTTP server answering every request with one canned response.
///
/// Request lines (`GET /search?... HTTP/1.1`) are sent to `requests` as they
/// arrive.
pub struct StubServer {
    pub url: String,
    pub requests: mpsc::Receiver<String>,
}

impl StubServer {
    pub fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read stub address");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain headers
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 2).unwrap_or(false) {
                    line.clear();
                }
                let _ = tx.send(request_line.trim_end().to_string());

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        StubServer {
            url: format!("http://{addr}/search"),
            requests: rx,
        }
    }

    pub fn next_request(&self) -> Option<String> {
        self.requests.recv_timeout(Duration::from_secs(5)).ok()
    }
}

pub const RING_RESULTS: &str = r#"{"count":3,"results":[
{"group_name":"ring","jar_name":"ring","version":"1.2.0","description":"A Clojure web applications library."},
{"group_name":"ring","jar_name":"ring-core","version":"1.9.0"},
{"group_name":"metosin","jar_name":"reitit-ring","version":"0.7.0"}
]}"#;
