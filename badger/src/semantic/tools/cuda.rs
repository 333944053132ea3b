// SPDX-License-Identifier: GPL-3.0-or-later

//! The CUDA meta compiler (`nvcc`). It forwards host compilation to GCC
//! or Clang, so the table extends the GCC list with the device side
//! spellings and the host forwarding options.
//!
//! https://docs.nvidia.com/cuda/cuda-compiler-driver-nvcc/

use super::super::flags::{FlagDef, FlagsByName};
use super::super::parser::recognize_with_table;
use super::super::{program_name, source, Recognition, Tool};
use super::gcc;
use crate::events::Execution;
use std::path::Path;
use std::sync::LazyLock;

static CUDA_FLAGS: LazyLock<FlagsByName> = LazyLock::new(|| {
    use crate::semantic::flags::Spelling::Exact;
    use crate::semantic::flags::{Attachment as A, FlagCategory as C};

    let mut flags = gcc::flag_list();
    flags.extend([
        // device code generation
        (Exact("--gpu-architecture"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-arch"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("--gpu-code"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-code"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("--generate-code"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-gencode"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-rdc"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("--relocatable-device-code"), FlagDef::with_value(C::PassThrough, A::Eq)),
        (Exact("--maxrregcount"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-maxrregcount"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("--use_fast_math"), FlagDef::plain(C::PassThrough)),
        (Exact("-use_fast_math"), FlagDef::plain(C::PassThrough)),
        (Exact("-lineinfo"), FlagDef::plain(C::PassThrough)),
        (Exact("--generate-line-info"), FlagDef::plain(C::PassThrough)),
        (Exact("-G"), FlagDef::plain(C::PassThrough)),
        // compilation phases
        (Exact("--compile"), FlagDef::plain(C::CompileOnly)),
        (Exact("-dc"), FlagDef::plain(C::CompileOnly)),
        (Exact("--device-c"), FlagDef::plain(C::CompileOnly)),
        (Exact("-dw"), FlagDef::plain(C::CompileOnly)),
        (Exact("--device-w"), FlagDef::plain(C::CompileOnly)),
        (Exact("-ptx"), FlagDef::plain(C::CompileOnly)),
        (Exact("--ptx"), FlagDef::plain(C::CompileOnly)),
        (Exact("-cubin"), FlagDef::plain(C::CompileOnly)),
        (Exact("--cubin"), FlagDef::plain(C::CompileOnly)),
        (Exact("-fatbin"), FlagDef::plain(C::CompileOnly)),
        (Exact("--fatbin"), FlagDef::plain(C::CompileOnly)),
        (Exact("-dlink"), FlagDef::plain(C::LinkOnly)),
        (Exact("--device-link"), FlagDef::plain(C::LinkOnly)),
        (Exact("--link"), FlagDef::plain(C::LinkOnly)),
        (Exact("--lib"), FlagDef::plain(C::LinkOnly)),
        (Exact("--cudart"), FlagDef::with_value(C::LinkOnly, A::EqOrSeparate)),
        (Exact("--cuda-path"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        // host compiler forwarding
        (Exact("-ccbin"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("--compiler-bindir"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-Xcompiler"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("--compiler-options"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-Xptxas"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-Xnvlink"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        (Exact("-Xlinker"), FlagDef::with_value(C::LinkOnly, A::EqOrSeparate)),
        // language selection
        (Exact("--x"), FlagDef::with_value(C::StandardVersion, A::EqOrSeparate)),
        (Exact("--std"), FlagDef::with_value(C::StandardVersion, A::EqOrSeparate)),
        (Exact("-default-stream"), FlagDef::with_value(C::PassThrough, A::EqOrSeparate)),
        // queries
        (Exact("--list-gpu-arch"), FlagDef::plain(C::Query)),
        (Exact("--list-gpu-code"), FlagDef::plain(C::Query)),
        (Exact("-h"), FlagDef::plain(C::Query)),
    ]);
    FlagsByName::new(&flags)
});

#[derive(Debug, Default)]
pub(super) struct Cuda;

impl Tool for Cuda {
    fn matches(&self, program: &Path) -> bool {
        program_name(program).is_some_and(|name| name == "nvcc")
    }

    fn recognize(&self, execution: &Execution) -> Recognition {
        recognize_with_table(execution, &CUDA_FLAGS, source::cuda_source, true)
    }
}
