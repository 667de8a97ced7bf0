//! Fixtures and fakes shared by the store tests

use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt};
use gh_client::{
    ChangedFile, ClientProvider, FileStatus, GitHubClient, GitHubError, PullRequest,
    PullRequestFiles,
};
use review_stream::{ReviewError, ReviewRequest, ReviewStream, ReviewStreamSource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

pub fn file(filename: &str, patch: &str) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        status: FileStatus::Modified,
        additions: patch.lines().filter(|l| l.starts_with('+')).count() as u64,
        deletions: patch.lines().filter(|l| l.starts_with('-')).count() as u64,
        patch: patch.to_string(),
    }
}

pub fn pull_request(title: &str) -> PullRequest {
    PullRequest {
        title: title.to_string(),
        author: "octocat".to_string(),
        body: "Body".to_string(),
        base_branch: "main".to_string(),
        head_branch: "feature".to_string(),
        additions: 3,
        deletions: 1,
    }
}

/// A loaded PR with `a.rs`, a binary `logo.png` and `b.rs`
pub fn loaded_state() -> AppState {
    let mut state = AppState::default();
    state.pr_data.pr_url = "https://github.com/foo/bar/pull/42".to_string();
    state.pr_data.pull_request = pull_request("Add parser");
    state.pr_data.files = vec![
        file("a.rs", "+a"),
        file("logo.png", ""),
        file("b.rs", "+b\n-c"),
    ];
    state
}

/// Process queued actions until `done` holds for the store state
pub async fn settle(store: &mut Store, done: impl Fn(&AppState) -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !done(store.state()) {
            if !store.process_next().await {
                break;
            }
        }
    })
    .await
    .expect("store did not reach the expected state");
}

/// In-memory GitHub returning one fixed PR (or one fixed error)
pub struct FakeGitHub {
    client: Arc<FakeClient>,
    tokens: Mutex<Vec<Option<String>>>,
}

struct FakeClient {
    result: Result<(PullRequest, Vec<ChangedFile>), GitHubError>,
    requests: Mutex<Vec<(String, usize)>>,
}

impl FakeGitHub {
    pub fn new(pull_request: PullRequest, files: Vec<ChangedFile>) -> Self {
        Self::with_result(Ok((pull_request, files)))
    }

    pub fn failing(error: GitHubError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<(PullRequest, Vec<ChangedFile>), GitHubError>) -> Self {
        Self {
            client: Arc::new(FakeClient {
                result,
                requests: Mutex::new(Vec::new()),
            }),
            tokens: Mutex::new(Vec::new()),
        }
    }

    /// `("owner/repo#n", max_files)` of every file listing request
    pub fn requests(&self) -> Vec<(String, usize)> {
        self.client.requests.lock().unwrap().clone()
    }

    /// Tokens clients were requested for
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientProvider for FakeGitHub {
    async fn client(&self, token: Option<&str>) -> Result<Arc<dyn GitHubClient>, GitHubError> {
        self.tokens.lock().unwrap().push(token.map(str::to_string));
        let client: Arc<dyn GitHubClient> = self.client.clone();
        Ok(client)
    }
}

#[async_trait]
impl GitHubClient for FakeClient {
    async fn fetch_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        _pr_number: u64,
    ) -> Result<PullRequest, GitHubError> {
        self.result.clone().map(|(pr, _)| pr)
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        max_files: usize,
    ) -> Result<PullRequestFiles, GitHubError> {
        self.requests
            .lock()
            .unwrap()
            .push((format!("{}/{}#{}", owner, repo, pr_number), max_files));

        let (_, mut files) = self.result.clone()?;
        let truncated = files.len() >= max_files;
        files.truncate(max_files);
        Ok(PullRequestFiles { files, truncated })
    }
}

/// Review source replaying scripted chunks per file
///
/// Files without a script get a single `Review of <filename>` chunk. When
/// gated, every stream waits for a permit before yielding anything.
#[derive(Default)]
pub struct ScriptedReviewer {
    scripts: HashMap<String, Vec<Result<String, ReviewError>>>,
    gate: Option<Arc<Semaphore>>,
    calls: Mutex<Vec<ReviewRequest>>,
}

impl ScriptedReviewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, filename: &str, chunks: Vec<Result<String, ReviewError>>) -> Self {
        self.scripts.insert(filename.to_string(), chunks);
        self
    }

    /// Hold every stream until a permit is added to the returned semaphore
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Filenames of every opened stream, in order
    pub fn calls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.filename).collect()
    }

    pub fn requests(&self) -> Vec<ReviewRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl ReviewStreamSource for ScriptedReviewer {
    fn stream_review(&self, request: ReviewRequest) -> ReviewStream {
        let chunks = self
            .scripts
            .get(&request.filename)
            .cloned()
            .unwrap_or_else(|| vec![Ok(format!("Review of {}", request.filename))]);
        self.calls.lock().unwrap().push(request);

        let gate = self.gate.clone();
        let opened = async move {
            if let Some(gate) = gate {
                if let Ok(permit) = gate.acquire().await {
                    permit.forget();
                }
            }
        };

        stream::once(opened)
            .filter_map(|()| future::ready(None::<Result<String, ReviewError>>))
            .chain(stream::iter(chunks))
            .boxed()
    }
}
