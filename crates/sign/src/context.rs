//! Machinery shared by sign and verify contexts
//!
//! A [`Core`] owns at most one engine binding. The binding is present
//! exactly while the state is streaming, and [`Core::release`] is the only
//! place it is dropped: construction failure, finalize, destroy and `Drop`
//! all go through it.

use crate::dispatch::Binding;
use crate::negotiate;
use crate::state::State;
use streamsig_api::{
    AlgorithmId, AlgorithmParams, ContextOptions, Error, KeyKind, Result, SignatureEngine,
};

/// Which side of the protocol a context serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Sign,
    Verify,
}

impl Role {
    fn name(self) -> &'static str {
        match self {
            Role::Sign => "sign context",
            Role::Verify => "verify context",
        }
    }
}

pub(crate) struct Core {
    role: Role,
    params: AlgorithmParams,
    binding: Option<Binding>,
    state: State,
}

impl Core {
    /// Resolve `blob`, bind an engine and start in `Ready`
    pub(crate) fn open(role: Role, blob: &[u8], options: ContextOptions) -> Result<Self> {
        let resolved = streamsig_keys::resolve(blob).map_err(|e| {
            log::warn!("{}: key rejected: {}", role.name(), e);
            e
        })?;

        let material = match (role, resolved.kind()) {
            (Role::Sign, KeyKind::Private) => resolved.material,
            (Role::Sign, KeyKind::Public) => {
                log::warn!("{}: {} blob holds a public key", role.name(), resolved.algorithm);
                return Err(Error::fail(role.name(), "signing needs a private key"));
            }
            (Role::Verify, _) => resolved.material.into_public(),
        };

        let params = AlgorithmParams::new(resolved.algorithm, options);
        let binding = Binding::init(&params, material).map_err(|e| {
            log::warn!("{}: {} engine init failed: {}", role.name(), params.algorithm, e);
            e
        })?;

        log::debug!("{}: created for {}", role.name(), params.algorithm);

        Ok(Self {
            role,
            params,
            binding: Some(binding),
            state: State::Ready,
        })
    }

    pub(crate) fn algorithm(&self) -> AlgorithmId {
        self.params.algorithm
    }

    pub(crate) fn state(&self) -> State {
        self.state
    }

    pub(crate) fn signature_len(&self) -> usize {
        negotiate::signature_len(self.params.algorithm)
    }

    pub(crate) fn context(&self) -> &'static str {
        self.role.name()
    }

    /// The live binding, or `InvalidParameter` outside the streaming states
    pub(crate) fn streaming(&mut self) -> Result<&mut Binding> {
        let state = self.state;
        let context = self.role.name();
        match self.binding.as_mut() {
            Some(binding) if state.is_streaming() => Ok(binding),
            _ => Err(Error::invalid_parameter(
                context,
                format!("context is {:?}", state),
            )),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) -> Result<()> {
        let context = self.context();
        if data.is_empty() {
            return Err(Error::invalid_parameter(context, "empty data"));
        }

        let result = self.streaming()?.update(data);
        match result {
            Ok(()) => {
                log::trace!("{}: fed {} bytes", context, data.len());
                self.state = State::Updated;
                Ok(())
            }
            Err(e) => {
                self.finalize();
                Err(e)
            }
        }
    }

    /// Release the engine and enter `Finalized`
    pub(crate) fn finalize(&mut self) {
        self.release();
        self.state = State::Finalized;
    }

    /// Release the engine and enter `Destroyed`; repeated calls are no-ops
    pub(crate) fn destroy(&mut self) {
        if self.state == State::Destroyed {
            return;
        }
        self.release();
        self.state = State::Destroyed;
        log::debug!("{}: destroyed ({})", self.context(), self.params.algorithm);
    }

    fn release(&mut self) {
        if let Some(mut binding) = self.binding.take() {
            binding.cleanup();
        }
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        self.release();
    }
}
