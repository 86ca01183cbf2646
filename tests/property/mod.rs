// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests

mod chart_values;
mod status_mapping;
