//! refptr: a smart pointer for objects that carry their own intrusive
//! reference count.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: calling code never touches `add_ref`/`release_ref` by hand;
//!   the wrapper's construction, clone, drop, assignment, swap and detach
//!   rules do all count bookkeeping, so a forgotten release (leak) or an
//!   extra one (use-after-free) cannot be written in safe code.
//! - Layers:
//!   - count: `RefCount` / `AtomicRefCount`, the counters a target
//!     embeds, plus the `RefCounted` capability contract and the
//!     `ThreadSafeRefCounted` marker.
//!   - `RefPtr<T>`: the wrapper. Holds at most one possibly-null address
//!     and owns exactly one unit of the target's count when non-null.
//!   - `Counted<T>` / `AtomicCounted<T>`: ready-made heap-allocated
//!     targets for callers that do not hand-roll a counted type.
//!
//! Ownership accounting
//! - A target's live count always equals the number of live non-null
//!   wrappers plus the number of detached pointers not yet balanced.
//! - Units are acquired only by binding a raw pointer, cloning, and the
//!   acquire half of `set`; they are returned only by dropping and the
//!   release half of `set`. Everything else (move, `take`, `swap`,
//!   `swap_raw`, `detach`, `adopt`) transfers units between owners and
//!   never touches a count.
//! - `set` acquires the incoming target before releasing the old one, so
//!   aliasing assignments (`w.set(w.get())`) cannot destroy the object
//!   they are re-acquiring. Wrapper-to-wrapper assignment is plain Rust
//!   assignment, which evaluates the right-hand side before dropping the
//!   old value and therefore keeps the same ordering.
//!
//! Constraints
//! - The count lives inside the target (intrusive), never beside the
//!   pointer. The wrapper never runs a destructor itself: the final
//!   `release_ref` is the target destroying itself.
//! - Null is a first-class wrapper state and never generates count
//!   traffic.
//! - No internal synchronization. Counting from several threads is sound
//!   only for targets declaring `ThreadSafeRefCounted`, which is what
//!   gates the wrapper's `Send`/`Sync`.
//!
//! Overflow and misuse semantics
//! - Count overflow aborts the process, matching `Rc`/`Arc`.
//! - Count underflow and dereferencing a null wrapper panic with an
//!   invariant message. Obligations the library cannot check (validity
//!   of raw pointers handed to `from_ptr`/`adopt`/`set`/`swap_raw`,
//!   balancing a detached unit) are `unsafe` contracts on those
//!   operations.
//!
//! Notes and non-goals
//! - No weak references.
//! - No custom deleters: destruction is the target's own `release_ref`
//!   reaching zero.
//! - `detach` deliberately breaks the bookkeeping invariant and hands the
//!   caller one unit to balance; it is the escape hatch for crossing
//!   boundaries that traffic in raw pointers, and `adopt` is its inverse.
//! - Upcasts to capability trait objects go through `detach` + `adopt`
//!   with the standard raw-pointer unsizing coercion; no nightly
//!   machinery.
//! - Reference cycles leak, as with `Rc`.

pub mod count;
mod counted;
mod ref_ptr;

// Public surface
pub use count::{AtomicRefCount, RefCount, RefCounted, ThreadSafeRefCounted};
pub use counted::{AtomicCounted, Counted};
pub use ref_ptr::RefPtr;
