// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod generator_tests;
mod phrases_tests;
mod simulator_subscribe_tests;
mod simulator_timing_tests;
