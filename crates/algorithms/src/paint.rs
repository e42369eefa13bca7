use sortscope_core::Annotate;

use crate::{Error, Role};

/// Optional annotation hook shared by the plain and annotated variants.
///
/// The `()` impl paints nothing, so plain variants place no [`Annotate`]
/// bound on the sequence.
pub(crate) trait Painter<S: ?Sized> {
    /// Sets or clears the role of a single position.
    fn paint(&mut self, seq: &mut S, position: usize, role: Option<Role>) -> Result<(), Error>;

    /// Resets every position to no role.
    fn clear(&mut self, seq: &mut S) -> Result<(), Error>;
}

impl<S: ?Sized> Painter<S> for () {
    fn paint(&mut self, _seq: &mut S, _position: usize, _role: Option<Role>) -> Result<(), Error> {
        Ok(())
    }

    fn clear(&mut self, _seq: &mut S) -> Result<(), Error> {
        Ok(())
    }
}

/// Paints roles as annotations on the sequence.
pub(crate) struct Roles;

impl<S> Painter<S> for Roles
where
    S: Annotate,
    S::Annotation: From<Role>,
{
    fn paint(&mut self, seq: &mut S, position: usize, role: Option<Role>) -> Result<(), Error> {
        seq.annotate(position, role.map(Into::into))?;
        Ok(())
    }

    fn clear(&mut self, seq: &mut S) -> Result<(), Error> {
        let n = seq.len();
        seq.set_annotations(Some(vec![None; n]))?;
        Ok(())
    }
}
