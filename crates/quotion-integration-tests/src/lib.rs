// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of QuotION.

//! Integration test crate - see tests/ directory
