//! MutexUtil and RwLockUtil are helper traits to simplify the error handling
//! when locking a Mutex or an RwLock.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub trait MutexUtil<T> {
    fn acquire_mutex(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexUtil<T> for Mutex<T> {
    fn acquire_mutex(&self) -> MutexGuard<'_, T> {
        match self.lock() {
            Ok(locked_mutex) => locked_mutex,
            Err(e) => {
                panic!("poisoned mutex: {e}")
            }
        }
    }
}

pub trait RwLockUtil<T> {
    fn acquire_read(&self) -> RwLockReadGuard<'_, T>;

    fn acquire_write(&self) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockUtil<T> for RwLock<T> {
    fn acquire_read(&self) -> RwLockReadGuard<'_, T> {
        match self.read() {
            Ok(guard) => guard,
            Err(e) => {
                panic!("poisoned lock: {e}")
            }
        }
    }

    fn acquire_write(&self) -> RwLockWriteGuard<'_, T> {
        match self.write() {
            Ok(guard) => guard,
            Err(e) => {
                panic!("poisoned lock: {e}")
            }
        }
    }
}
