//! Scratch buffer pool for packet encoding.
//!
//! Encoding needs a maximum-size scratch buffer per call; pooling avoids a
//! fresh 4 KiB allocation for every packet. Checked-out buffers are
//! exclusively owned until dropped, and the codec always copies the finished
//! wire bytes out before the buffer goes back, so pool contents never alias
//! live packet data.

use std::sync::{Arc, Mutex};

/// A reusable buffer that returns itself to the pool on drop.
pub struct PooledBuffer {
    buffer: Vec<u8>,
    pool: Arc<BufferPool>,
}

impl PooledBuffer {
    pub fn as_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buffer
    }

    pub fn as_ref(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let mut buffer = std::mem::take(&mut self.buffer);
        if let Ok(mut buffers) = self.pool.buffers.lock() {
            if buffers.len() < self.pool.max_pool_size {
                buffer.clear();
                if buffer.capacity() > self.pool.buffer_size * 2 {
                    buffer.shrink_to(self.pool.buffer_size);
                }
                buffers.push(buffer);
            }
        }
        // A poisoned lock or a full pool just drops the buffer.
    }
}

impl AsRef<[u8]> for PooledBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl AsMut<Vec<u8>> for PooledBuffer {
    fn as_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buffer
    }
}

/// Thread-safe pool of reusable byte buffers.
pub struct BufferPool {
    buffers: Mutex<Vec<Vec<u8>>>,
    buffer_size: usize,
    max_pool_size: usize,
}

impl BufferPool {
    /// Create a pool handing out buffers with at least `buffer_size`
    /// capacity, keeping at most `max_pool_size` idle buffers around.
    pub fn new(buffer_size: usize, max_pool_size: usize) -> Arc<Self> {
        Arc::new(BufferPool {
            buffers: Mutex::new(Vec::with_capacity(max_pool_size)),
            buffer_size,
            max_pool_size,
        })
    }

    /// Take a buffer from the pool, allocating a new one if it is empty.
    /// The returned buffer is always empty.
    pub fn acquire(self: &Arc<Self>) -> PooledBuffer {
        let buffer = {
            let mut pool = self.buffers.lock().unwrap_or_else(|e| e.into_inner());
            pool.pop()
                .unwrap_or_else(|| Vec::with_capacity(self.buffer_size))
        };
        PooledBuffer {
            buffer,
            pool: Arc::clone(self),
        }
    }

    /// Current number of idle buffers, for monitoring.
    pub fn size(&self) -> usize {
        self.buffers.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn acquire_and_return() {
        let pool = BufferPool::new(4096, 10);

        let mut buffer = pool.acquire();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.capacity() >= 4096);

        buffer.as_mut().extend_from_slice(b"test data");
        assert_eq!(buffer.len(), 9);
        drop(buffer);

        assert_eq!(pool.size(), 1);

        let buffer2 = pool.acquire();
        assert_eq!(buffer2.len(), 0);
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn pool_respects_max_size() {
        let pool = BufferPool::new(1024, 2);

        let b1 = pool.acquire();
        let b2 = pool.acquire();
        let b3 = pool.acquire();
        assert_eq!(pool.size(), 0);

        drop(b1);
        drop(b2);
        drop(b3);
        assert_eq!(pool.size(), 2);
    }

    #[test]
    fn concurrent_borrow_and_return() {
        let pool = BufferPool::new(4096, 100);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let p = Arc::clone(&pool);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let mut buf = p.acquire();
                        buf.as_mut().extend_from_slice(b"test");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let size = pool.size();
        assert!(size > 0 && size <= 100);
    }
}
