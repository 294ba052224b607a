//! Locating and creating the read cache.
//!
//! newsie is commonly run from a pacman hook, i.e. as root through sudo. The
//! cache must still live in, and belong to, the invoking user's home, so the
//! owner is resolved from `SUDO_USER` when running with an effective uid of 0.

use std::ffi::{CStr, CString};
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::ErrorKind;
use std::os::unix::fs::{chown, DirBuilderExt, OpenOptionsExt};
use std::path::{Path, PathBuf};
use std::ptr;

use crate::app::{NewsieError, Result};

pub const CACHE_SUBDIR: &str = ".cache/newsie";
pub const CACHE_FILE: &str = "cache";

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// The real user the cache belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOwner {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
    pub home: PathBuf,
}

impl CacheOwner {
    /// Resolve the invoking user, looking through sudo when elevated.
    pub fn resolve() -> Result<Self> {
        let euid = unsafe { libc::geteuid() };

        if euid == 0 {
            if let Ok(sudo_user) = std::env::var("SUDO_USER") {
                if !sudo_user.is_empty() && sudo_user != "root" {
                    tracing::debug!("Running under sudo, cache owner is {}", sudo_user);
                    return lookup_user(&sudo_user);
                }
            }
        }

        let home = dirs::home_dir()
            .ok_or_else(|| NewsieError::UserLookup("could not find home directory".into()))?;
        let name = std::env::var("USER").unwrap_or_default();
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };

        Ok(Self {
            name,
            uid,
            gid,
            home,
        })
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.home.join(CACHE_SUBDIR)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir().join(CACHE_FILE)
    }
}

/// Ensure the cache directory and file exist, returning the file path.
pub fn bootstrap(owner: &CacheOwner) -> Result<PathBuf> {
    tracing::debug!(
        "Cache owner is {} ({}:{})",
        owner.name,
        owner.uid,
        owner.gid
    );
    bootstrap_in(&owner.cache_dir(), owner.uid, owner.gid)
}

/// Create `dir` and `dir/cache` if missing and hand newly created entries to
/// `uid:gid`. Existing entries are left untouched.
pub fn bootstrap_in(dir: &Path, uid: u32, gid: u32) -> Result<PathBuf> {
    create_dirs_owned(dir, uid, gid)?;

    let path = dir.join(CACHE_FILE);
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(FILE_MODE)
        .open(&path)
    {
        Ok(_) => {
            chown(&path, Some(uid), Some(gid))?;
            tracing::debug!("Created cache file {}", path.display());
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e.into()),
    }

    // Reject a directory or other non-file sitting where the cache should be.
    if !fs::metadata(&path)?.is_file() {
        return Err(NewsieError::Io(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("{} is not a regular file", path.display()),
        )));
    }

    Ok(path)
}

/// Create `dir` and any missing ancestors one level at a time, giving each
/// newly created level to `uid:gid` (e.g. `~/.cache` on a first sudo run).
fn create_dirs_owned(dir: &Path, uid: u32, gid: u32) -> Result<()> {
    let missing: Vec<&Path> = dir
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .collect();

    for level in missing.into_iter().rev() {
        match DirBuilder::new().mode(DIR_MODE).create(level) {
            Ok(()) => {
                chown(level, Some(uid), Some(gid))?;
                tracing::debug!("Created cache directory {}", level.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn lookup_user(name: &str) -> Result<CacheOwner> {
    let c_name =
        CString::new(name).map_err(|_| NewsieError::UserLookup(format!("invalid name {name:?}")))?;

    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = ptr::null_mut();

    let buf_len = unsafe {
        let size = libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX);
        if size > 0 {
            usize::try_from(size).unwrap_or(16 * 1024)
        } else {
            16 * 1024
        }
    }
    .clamp(8 * 1024, 256 * 1024);

    let mut buf: Vec<u8> = vec![0u8; buf_len];
    let rc = unsafe {
        libc::getpwnam_r(
            c_name.as_ptr(),
            &mut pwd,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() || pwd.pw_dir.is_null() {
        return Err(NewsieError::UserLookup(format!("unknown user {name}")));
    }

    let home = unsafe { CStr::from_ptr(pwd.pw_dir) }
        .to_string_lossy()
        .trim()
        .to_string();
    if home.is_empty() {
        return Err(NewsieError::UserLookup(format!("{name} has no home directory")));
    }

    Ok(CacheOwner {
        name: name.to_string(),
        uid: pwd.pw_uid,
        gid: pwd.pw_gid,
        home: PathBuf::from(home),
    })
}
