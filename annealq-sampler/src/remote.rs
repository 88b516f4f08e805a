//! Remote annealing-service client
//!
//! A blocking client for a quantum annealing cloud service: submit an Ising
//! problem, poll the job, fetch the energy-ordered answer. The service, its
//! scheduling, and the anneal itself are opaque; this module only speaks the
//! minimal JSON shapes below.
//!
//! Credentials and solver selection are injected configuration — nothing is
//! compiled in. The transport gets an explicit request timeout and a single
//! bounded retry; service-level failures (auth, quota, bad problems) surface
//! immediately as errors.
//!
//! # Example
//!
//! ```no_run
//! use annealq_sampler::remote::{RemoteConfig, RemoteSampler};
//!
//! let config = RemoteConfig::from_env()?;
//! let sampler = RemoteSampler::new(config)?;
//! // sampler.sample_ising(...)
//! # Ok::<(), annealq_sampler::SamplerError>(())
//! ```

use crate::params::SampleParams;
use crate::sampler::{Sampler, SolverProperties};
use crate::SamplerError;
use annealq_embed::ScaleRanges;
use annealq_model::{IsingModel, Sample, SampleRecord, SampleSet, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "ANNEALQ_API_TOKEN";
/// Environment variable holding the service URL
pub const URL_ENV: &str = "ANNEALQ_API_URL";
/// Environment variable holding the solver name
pub const SOLVER_ENV: &str = "ANNEALQ_SOLVER";

/// Remote service configuration
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API token
    pub api_token: String,

    /// Service base URL
    pub api_url: String,

    /// Solver to submit to (e.g. an advertised QPU name)
    pub solver: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Maximum polling attempts for job status
    pub max_polling_attempts: usize,

    /// Polling interval in milliseconds
    pub polling_interval_ms: u64,
}

impl RemoteConfig {
    /// Create a configuration from explicit values
    pub fn new(
        api_token: impl Into<String>,
        api_url: impl Into<String>,
        solver: impl Into<String>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            api_url: api_url.into(),
            solver: solver.into(),
            request_timeout_seconds: 30,
            max_polling_attempts: 120,
            polling_interval_ms: 1000,
        }
    }

    /// Read token, URL, and solver from the environment
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParams`] naming the missing variable.
    pub fn from_env() -> crate::Result<Self> {
        let read = |key: &str| {
            std::env::var(key)
                .map_err(|_| SamplerError::InvalidParams(format!("{} is not set", key)))
        };
        Ok(Self::new(read(TOKEN_ENV)?, read(URL_ENV)?, read(SOLVER_ENV)?))
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = seconds;
        self
    }

    /// Set the polling budget
    pub fn with_polling(mut self, max_attempts: usize, interval_ms: u64) -> Self {
        self.max_polling_attempts = max_attempts;
        self.polling_interval_ms = interval_ms;
        self
    }

    /// Total seconds the polling budget allows
    pub fn polling_budget_seconds(&self) -> u64 {
        (self.max_polling_attempts as u64 * self.polling_interval_ms) / 1000
    }
}

/// Job status reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Waiting in the service queue
    Queued,
    /// Annealing in progress
    Running,
    /// Finished, answer available
    Completed,
    /// Failed on the service side
    Failed,
    /// Cancelled before completion
    Cancelled,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "Queued"),
            JobStatus::Running => write!(f, "Running"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Failed => write!(f, "Failed"),
            JobStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Blocking client for a remote annealing service
pub struct RemoteSampler {
    config: RemoteConfig,
    client: reqwest::blocking::Client,
    properties: SolverProperties,
    name: String,
}

impl RemoteSampler {
    /// Create a client and fetch the solver's advertised properties
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the solver does
    /// not exist, or the credentials are rejected.
    pub fn new(config: RemoteConfig) -> crate::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| SamplerError::Unavailable(format!("HTTP client error: {}", e)))?;

        let name = config.solver.clone();
        let mut sampler = Self {
            config,
            client,
            properties: SolverProperties::software(),
            name,
        };
        sampler.properties = sampler.fetch_properties()?;
        Ok(sampler)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.config.api_token)
    }

    /// GET with a single bounded retry on transport errors
    ///
    /// HTTP-level failures are never retried; only connect/IO errors get a
    /// second attempt after a short pause.
    fn get_with_retry(&self, url: &str) -> crate::Result<reqwest::blocking::Response> {
        let send = || {
            self.client
                .get(url)
                .header("Authorization", self.auth_header())
                .send()
        };
        match send() {
            Ok(response) => Ok(response),
            Err(first) => {
                std::thread::sleep(Duration::from_millis(250));
                send().map_err(|second| {
                    SamplerError::RemoteSolveFailure(format!(
                        "transport error (after retry): {}; first attempt: {}",
                        second, first
                    ))
                })
            }
        }
    }

    fn fetch_properties(&self) -> crate::Result<SolverProperties> {
        let url = format!("{}/solvers/{}", self.config.api_url, self.config.solver);
        let response = self.get_with_retry(&url)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SamplerError::AuthenticationFailed(
                "token rejected while fetching solver properties".to_string(),
            ));
        }
        if !response.status().is_success() {
            return Err(SamplerError::Unavailable(format!(
                "solver {} not available: {}",
                self.config.solver,
                response.status()
            )));
        }

        let info: SolverInfo = response
            .json()
            .map_err(|e| SamplerError::MalformedAnswer(format!("solver properties: {}", e)))?;
        Ok(info.into_properties())
    }

    fn submit(&self, model: &IsingModel, params: &SampleParams) -> crate::Result<String> {
        let label = params.label.clone().unwrap_or_else(|| {
            format!("annealq-{}", uuid::Uuid::new_v4())
        });

        let request = ProblemRequest {
            solver: self.config.solver.clone(),
            label,
            num_reads: params.num_reads,
            linear: model
                .iter_h()
                .map(|(v, bias)| (v.index().to_string(), bias))
                .collect(),
            quadratic: model
                .iter_j()
                .map(|((u, v), weight)| (u.index(), v.index(), weight))
                .collect(),
        };

        let url = format!("{}/problems", self.config.api_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .map_err(|e| SamplerError::RemoteSolveFailure(format!("transport error: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            reqwest::StatusCode::UNAUTHORIZED => {
                return Err(SamplerError::AuthenticationFailed(
                    "token rejected on submission".to_string(),
                ))
            }
            status => {
                let body = response.text().unwrap_or_default();
                return Err(SamplerError::SubmissionFailed(format!("{}: {}", status, body)));
            }
        }

        let submitted: ProblemSubmitted = response
            .json()
            .map_err(|e| SamplerError::MalformedAnswer(format!("submission response: {}", e)))?;
        Ok(submitted.id)
    }

    /// Query the status of a submitted job
    pub fn job_status(&self, job_id: &str) -> crate::Result<JobStatus> {
        let url = format!("{}/problems/{}", self.config.api_url, job_id);
        let response = self.get_with_retry(&url)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SamplerError::JobNotFound {
                job_id: job_id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(SamplerError::RemoteSolveFailure(format!(
                "status query failed: {}",
                response.status()
            )));
        }

        let info: ProblemInfo = response
            .json()
            .map_err(|e| SamplerError::MalformedAnswer(format!("job info: {}", e)))?;
        Ok(info.status())
    }

    fn fetch_answer(&self, job_id: &str) -> crate::Result<SampleSet> {
        let url = format!("{}/problems/{}/answer", self.config.api_url, job_id);
        let response = self.get_with_retry(&url)?;

        if !response.status().is_success() {
            return Err(SamplerError::RemoteSolveFailure(format!(
                "answer fetch failed: {}",
                response.status()
            )));
        }

        let answer: ProblemAnswer = response
            .json()
            .map_err(|e| SamplerError::MalformedAnswer(format!("answer: {}", e)))?;

        if answer.solutions.is_empty() {
            return Err(SamplerError::MalformedAnswer(
                "service returned no solutions".to_string(),
            ));
        }

        let mut records = Vec::with_capacity(answer.solutions.len());
        for solution in answer.solutions {
            let energy = solution.energy;
            let num_occurrences = solution.num_occurrences;
            let sample = solution.into_sample()?;
            // Trust boundary: the assignment came off the wire
            sample.validate()?;
            records.push(SampleRecord {
                sample,
                energy,
                num_occurrences,
            });
        }
        Ok(SampleSet::from_records(records))
    }
}

impl Sampler for RemoteSampler {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> &SolverProperties {
        &self.properties
    }

    fn sample_ising(&self, model: &IsingModel, params: &SampleParams) -> crate::Result<SampleSet> {
        params.validate()?;

        let job_id = self.submit(model, params)?;

        for _ in 0..self.config.max_polling_attempts {
            std::thread::sleep(Duration::from_millis(self.config.polling_interval_ms));

            match self.job_status(&job_id)? {
                JobStatus::Completed => return self.fetch_answer(&job_id),
                JobStatus::Failed => {
                    return Err(SamplerError::RemoteSolveFailure(format!(
                        "job {} failed on the service",
                        job_id
                    )))
                }
                JobStatus::Cancelled => {
                    return Err(SamplerError::RemoteSolveFailure(format!(
                        "job {} was cancelled",
                        job_id
                    )))
                }
                JobStatus::Queued | JobStatus::Running => {}
            }
        }

        Err(SamplerError::Timeout {
            seconds: self.config.polling_budget_seconds(),
        })
    }
}

// Wire structures

#[derive(Debug, Serialize)]
struct ProblemRequest {
    solver: String,
    label: String,
    num_reads: usize,
    /// Variable index (as a decimal string, JSON object keys) -> bias
    linear: BTreeMap<String, f64>,
    /// (u, v, weight) triples
    quadratic: Vec<(usize, usize, f64)>,
}

#[derive(Debug, Deserialize)]
struct ProblemSubmitted {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProblemInfo {
    status: String,
}

impl ProblemInfo {
    fn status(&self) -> JobStatus {
        match self.status.as_str() {
            "PENDING" | "QUEUED" => JobStatus::Queued,
            "IN_PROGRESS" | "RUNNING" => JobStatus::Running,
            "COMPLETED" => JobStatus::Completed,
            "CANCELLED" => JobStatus::Cancelled,
            // Unknown states are treated as failed rather than polled forever
            _ => JobStatus::Failed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProblemAnswer {
    solutions: Vec<Solution>,
}

#[derive(Debug, Deserialize)]
struct Solution {
    /// Variable index (as a decimal string) -> spin value
    assignment: BTreeMap<String, i8>,
    energy: f64,
    #[serde(default = "one")]
    num_occurrences: usize,
}

fn one() -> usize {
    1
}

impl Solution {
    fn into_sample(self) -> crate::Result<Sample> {
        let mut values = Vec::with_capacity(self.assignment.len());
        for (key, value) in self.assignment {
            let index: usize = key.parse().map_err(|_| {
                SamplerError::MalformedAnswer(format!("non-numeric variable key: {}", key))
            })?;
            values.push((Variable::new(index), value));
        }
        Ok(Sample::spin(values))
    }
}

#[derive(Debug, Deserialize)]
struct SolverInfo {
    num_qubits: usize,
    #[serde(default)]
    couplers: Vec<(usize, usize)>,
    #[serde(default = "default_h_range")]
    h_range: f64,
    #[serde(default = "default_j_range")]
    j_range: f64,
    #[serde(default)]
    max_num_reads: Option<usize>,
}

fn default_h_range() -> f64 {
    2.0
}

fn default_j_range() -> f64 {
    1.0
}

impl SolverInfo {
    fn into_properties(self) -> SolverProperties {
        let topology = if self.couplers.is_empty() {
            None
        } else {
            let mut graph = annealq_embed::Topology::new();
            for (q1, q2) in &self.couplers {
                graph.add_edge(*q1, *q2);
            }
            Some(graph)
        };

        SolverProperties {
            num_qubits: self.num_qubits,
            topology,
            ranges: ScaleRanges {
                h_range: self.h_range,
                j_range: self.j_range,
            },
            max_num_reads: self.max_num_reads,
        }
    }
}
