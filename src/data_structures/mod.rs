pub mod batch_heap;
pub mod priority_queue;

pub use batch_heap::BatchHeap;
pub use priority_queue::BinaryHeapWrapper;
