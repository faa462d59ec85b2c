/// Raises a view-model flag (`saving`, `uploading`) for as long as it lives.
///
/// Lowered on drop, so a request future dropped mid-flight never leaves the
/// flag stuck.
pub(crate) struct BusyFlag<'a> {
    flag: &'a mut bool,
}

impl<'a> BusyFlag<'a> {
    pub(crate) fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for BusyFlag<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
