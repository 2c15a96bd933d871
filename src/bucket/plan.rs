// plan.rs - contiguous job buckets over the input list

use serde::Serialize;

/// Files per job: ceiling of `total / jobs`
///
/// Returns 0 when there is nothing to split. A `jobs` of 0 is treated as 1.
pub fn bucket_size(total: usize, jobs: usize) -> usize {
    total.div_ceil(jobs.max(1))
}

/// Boundary arithmetic for walking `total` inputs in buckets of `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketPlan {
    pub total: usize,
    pub size: usize,
}

impl BucketPlan {
    pub fn new(total: usize, jobs: usize) -> Self {
        Self {
            total,
            size: bucket_size(total, jobs),
        }
    }

    /// True if the 1-based `position` starts a new bucket
    pub fn opens_at(&self, position: usize) -> bool {
        position >= 1 && position <= self.total && (position - 1) % self.size == 0
    }

    /// True if the 1-based `position` is the last file of its bucket
    pub fn closes_at(&self, position: usize) -> bool {
        position >= 1
            && position <= self.total
            && (position % self.size == 0 || position == self.total)
    }

    /// Number of buckets the walk produces
    pub fn bucket_count(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            bucket_size(self.total, self.size)
        }
    }

    /// 1-based bucket index owning the 1-based `position`
    pub fn bucket_of(&self, position: usize) -> Option<usize> {
        if position == 0 || position > self.total {
            return None;
        }
        Some((position - 1) / self.size + 1)
    }
}

/// One job's share of the inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// 1-based job number, also used in script and log names
    pub index: usize,
    pub files: Vec<String>,
}

/// Split `files` into at most `jobs` contiguous buckets, preserving order
pub fn plan_buckets(files: &[String], jobs: usize) -> Vec<Bucket> {
    let plan = BucketPlan::new(files.len(), jobs);
    let mut buckets: Vec<Bucket> = Vec::with_capacity(plan.bucket_count());

    for (offset, file) in files.iter().enumerate() {
        let position = offset + 1;
        if let (true, Some(index)) = (plan.opens_at(position), plan.bucket_of(position)) {
            buckets.push(Bucket {
                index,
                files: Vec::with_capacity(plan.size),
            });
        }
        if let Some(current) = buckets.last_mut() {
            current.files.push(file.clone());
        }
    }

    buckets
}
