//! Background fetch loop and the consumer-facing page stream

use crate::config::ClientConfig;
use crate::error::Result;
use crate::params::{SelectParams, CURSOR_MARK, CURSOR_START};
use crate::response::SolrResponse;
use crate::select;
use futures::Stream;
use reqwest::Client;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A lazy, ordered stream of select result pages.
///
/// Each item is either a decoded page or the terminal error; after an
/// error no further items arrive. The stream is not restartable: to query
/// again, build a new one with fresh parameters.
///
/// The fetch loop runs on its own task and never fetches more than one
/// page ahead of the consumer. Dropping the stream cancels the task.
pub struct CursorStream {
    rx: mpsc::Receiver<Result<SolrResponse>>,
    task: JoinHandle<()>,
}

impl CursorStream {
    /// Spawn the fetch loop over its own working copy of the parameters.
    pub(crate) fn spawn(config: ClientConfig, mut params: SelectParams, http: Client) -> Self {
        if params.get(CURSOR_MARK).is_none() {
            params.set(CURSOR_MARK, CURSOR_START);
        }

        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(fetch_loop(config, params, http, tx));

        Self { rx, task }
    }

    /// Stop the background fetch task without draining the stream.
    pub fn abort(&self) {
        self.task.abort();
    }
}

impl Stream for CursorStream {
    type Item = Result<SolrResponse>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl Drop for CursorStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Sequential fetch loop. Owns the working parameter set; the only state
/// shared with the consumer is the single-slot channel.
async fn fetch_loop(
    config: ClientConfig,
    mut params: SelectParams,
    http: Client,
    tx: mpsc::Sender<Result<SolrResponse>>,
) {
    let mut pages = 0usize;

    loop {
        // Rendezvous: the next request is not issued until the consumer
        // has taken the previous page.
        let Ok(permit) = tx.reserve().await else {
            debug!(pages, "consumer dropped, stopping cursor loop");
            return;
        };

        let sent_mark = params
            .get(CURSOR_MARK)
            .unwrap_or(CURSOR_START)
            .to_string();

        let result = tokio::select! {
            () = tx.closed() => {
                debug!(pages, "consumer dropped mid-request, stopping cursor loop");
                return;
            }
            result = select::select(&config, &params, &http) => result,
        };

        match result {
            Err(err) => {
                warn!(pages, %err, "cursor fetch failed");
                permit.send(Err(err));
                return;
            }
            Ok(envelope) => {
                // The engine signals the final page by echoing back the
                // token it was given.
                if envelope.next_cursor_mark == sent_mark {
                    debug!(pages, "cursor exhausted");
                    return;
                }
                params.set(CURSOR_MARK, envelope.next_cursor_mark.clone());
                pages += 1;
                permit.send(Ok(envelope));
            }
        }
    }
}
