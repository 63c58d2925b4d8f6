//! Host collaborator seam: open project, active item and undo grouping.
//!
//! `Transaction` is the scoped acquisition of one undo group. It ends the group
//! exactly once, either through `commit` or on drop.

mod document;

use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::project::ProjectDocument;

pub use document::DocumentHost;

pub trait Host {
    fn begin_transaction(&mut self, label: &str) -> Result<()>;
    fn end_transaction(&mut self) -> Result<()>;
    fn open_project(&mut self) -> Option<&mut ProjectDocument>;
}

pub struct Transaction<'h, H: Host + ?Sized> {
    host: &'h mut H,
    open: bool,
}

impl<'h, H: Host + ?Sized> Transaction<'h, H> {
    pub fn begin(host: &'h mut H, label: &str) -> Result<Self> {
        host.begin_transaction(label)?;
        Ok(Self { host, open: true })
    }

    /// End the undo group, surfacing any error from the host.
    pub fn commit(mut self) -> Result<()> {
        self.open = false;
        self.host.end_transaction()
    }
}

impl<H: Host + ?Sized> Deref for Transaction<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.host
    }
}

impl<H: Host + ?Sized> DerefMut for Transaction<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: Host + ?Sized> Drop for Transaction<'_, H> {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            if let Err(err) = self.host.end_transaction() {
                crate::log_status!("host", "Failed to close undo group: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct CountingHost {
        begun: Vec<String>,
        ended: usize,
        fail_end: bool,
    }

    impl Host for CountingHost {
        fn begin_transaction(&mut self, label: &str) -> Result<()> {
            self.begun.push(label.to_string());
            Ok(())
        }

        fn end_transaction(&mut self) -> Result<()> {
            self.ended += 1;
            if self.fail_end {
                return Err(Error::host_transaction_state("end failed"));
            }
            Ok(())
        }

        fn open_project(&mut self) -> Option<&mut ProjectDocument> {
            None
        }
    }

    #[test]
    fn commit_ends_once() {
        let mut host = CountingHost::default();
        let tx = Transaction::begin(&mut host, "Rename").unwrap();
        tx.commit().unwrap();
        assert_eq!(host.begun, vec!["Rename"]);
        assert_eq!(host.ended, 1);
    }

    #[test]
    fn drop_ends_uncommitted_group() {
        let mut host = CountingHost::default();
        {
            let mut tx = Transaction::begin(&mut host, "Rename").unwrap();
            assert!(tx.open_project().is_none());
        }
        assert_eq!(host.ended, 1);
    }

    #[test]
    fn failed_commit_is_not_retried_on_drop() {
        let mut host = CountingHost {
            fail_end: true,
            ..CountingHost::default()
        };
        let tx = Transaction::begin(&mut host, "Rename").unwrap();
        assert!(tx.commit().is_err());
        assert_eq!(host.ended, 1);
    }
}
