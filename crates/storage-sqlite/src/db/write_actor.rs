//! Single-writer actor for SQLite mutations.
//!
//! SQLite allows one writer at a time; funneling every mutation through a
//! dedicated thread keeps writers from contending on the busy timeout.
//! Reads keep going through the pool directly.

use diesel::sqlite::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use stakeboard_core::errors::{DatabaseError, Error, Result};

use super::DbPool;

type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) + Send>;

/// Cloneable handle that schedules closures on the writer thread.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::UnboundedSender<WriteJob>,
}

impl WriteHandle {
    /// Runs `f` on the writer thread and awaits its result.
    pub async fn exec<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let job: WriteJob = Box::new(move |conn| {
            let _ = reply_tx.send(f(conn));
        });
        self.tx.send(job).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "write actor is not running".to_string(),
            ))
        })?;
        reply_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "write actor dropped the job".to_string(),
            ))
        })?
    }
}

/// Spawns the writer thread and returns a handle to it.
///
/// The thread exits when the last handle is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<WriteJob>();
    std::thread::Builder::new()
        .name("sqlite-writer".to_string())
        .spawn(move || {
            while let Some(job) = rx.blocking_recv() {
                match pool.get() {
                    Ok(mut conn) => job(&mut conn),
                    Err(e) => {
                        // The job's reply channel is dropped with it, so the
                        // caller observes a write-actor failure.
                        log::error!("Write actor could not acquire a connection: {}", e);
                    }
                }
            }
        })
        .expect("failed to spawn sqlite writer thread");
    WriteHandle { tx }
}
