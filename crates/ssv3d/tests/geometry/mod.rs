mod ssv_distance;
mod ssv_properties;
mod ssv_setup_errors;
mod ssv_thin_triangles;
