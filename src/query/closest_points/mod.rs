//! Implementation details of the closest points computation between triangle features.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
};

mod closest_points_segment_segment;
