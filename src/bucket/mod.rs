mod plan;


pub use plan::{Bucket, BucketPlan, bucket_size, plan_buckets};
