use std::any::Any;
use std::ffi::CString;
use std::marker::PhantomData;
use std::ptr;

use csnd_sys as raw;
use libc::{c_char, c_int};

use crate::channels::{ChannelInfo, ControlChannelPtr};
use crate::devices::{AudioDevice, MidiDevice, Modules};
use crate::enums::{ControlChannelType, Status};
use crate::hostdata::HostData;
use crate::marshal;
use crate::params::CsoundParams;

/// A named table-construction (GEN) routine reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedGen {
    pub name: String,
    pub num: i32,
}

/// An instance of the Csound engine.
///
/// This struct owns the opaque native handle for its whole lifetime: the
/// handle is created on construction and destroyed on `Drop`, so there is no
/// observable destroyed-but-reachable state. Every method is a blocking call
/// into libcsound64.
#[derive(Debug)]
pub struct Csound {
    engine: Inner,
}

#[derive(Debug)]
struct Inner {
    csound: *mut raw::CSOUND,
}

unsafe impl Send for Inner {}

impl Default for Csound {
    fn default() -> Self {
        Csound::create(None)
    }
}

impl Csound {
    /// Creates a new engine instance with an empty host-data slot.
    pub fn new() -> Csound {
        Csound::default()
    }

    /// Creates a new engine instance carrying an initial host-data payload.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use csnd::Csound;
    /// let csound = Csound::with_host_data((1956u32, "context"));
    /// csound.host_data(|data: &(u32, &str)| assert_eq!(data.0, 1956));
    /// ```
    pub fn with_host_data<T>(data: T) -> Csound
    where
        T: Any + Send,
    {
        Csound::create(Some(Box::new(data)))
    }

    fn create(payload: Option<Box<dyn Any + Send>>) -> Csound {
        unsafe {
            // Csound must not install signal or atexit handlers in a host
            // application.
            raw::csoundInitialize(raw::CSOUNDINIT_NO_SIGNAL_HANDLER as c_int);
            raw::csoundInitialize(raw::CSOUNDINIT_NO_ATEXIT as c_int);

            let host_data = Box::new(HostData::new(payload));
            let host_data_ptr = Box::into_raw(host_data) as *mut libc::c_void;

            let csound = raw::csoundCreate(host_data_ptr);
            assert!(!csound.is_null());

            Csound {
                engine: Inner { csound },
            }
        }
    }

    /// Initializes the csound library with specific flags.
    /// Called internally on construction, so there is generally no need to
    /// use it explicitly unless default initialization (no signal handlers,
    /// no atexit callbacks) must be avoided.
    pub fn initialize(flags: i32) -> Result<(), &'static str> {
        unsafe {
            match raw::csoundInitialize(flags as c_int) {
                raw::CSOUND_ERROR => Err("Can't initialize csound"),
                raw::CSOUND_SUCCESS => Ok(()),
                value if value > 0 => Err("Initialization was done already"),
                _ => Err("Unknown initialization error"),
            }
        }
    }

    pub(crate) fn as_raw(&self) -> *mut raw::CSOUND {
        self.engine.csound
    }

    /// Returns the version number times 1000: 6.12.0 reports as 6120.
    pub fn version(&self) -> u32 {
        unsafe { raw::csoundGetVersion() as u32 }
    }

    /// Returns the API version number times 100.
    pub fn api_version(&self) -> u32 {
        unsafe { raw::csoundGetAPIVersion() as u32 }
    }

    /* Host data ************************************************************/

    fn host_slot(&self) -> &HostData {
        // The native slot always points at the HostData box installed by
        // `create` and reclaimed by `Drop`.
        unsafe { &*(raw::csoundGetHostData(self.engine.csound) as *const HostData) }
    }

    /// Attaches a host-data payload to this instance, replacing any previous
    /// one. The wrapper stores the value verbatim and never interprets it.
    pub fn set_host_data<T>(&self, data: T)
    where
        T: Any + Send,
    {
        self.host_slot().set(Box::new(data));
    }

    /// Like [`Csound::set_host_data`] but stores the given box itself, so the
    /// caller-observed allocation is preserved across the round trip.
    pub fn set_host_data_boxed(&self, data: Box<dyn Any + Send>) {
        self.host_slot().set(data);
    }

    /// Borrows the host-data payload downcast to `T`.
    /// # Returns
    /// The closure result, or `None` if the slot is empty or holds a payload
    /// of a different type. Type agreement between writer and reader is the
    /// caller's responsibility; a mismatch reads as empty instead of
    /// undefined behavior.
    pub fn host_data<T, R, F>(&self, f: F) -> Option<R>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        self.host_slot().with(f)
    }

    /// Removes and returns the host-data payload, leaving the slot empty.
    pub fn take_host_data(&self) -> Option<Box<dyn Any + Send>> {
        self.host_slot().take()
    }

    /// Empties the host-data slot.
    pub fn clear_host_data(&self) {
        self.host_slot().take();
    }

    pub fn has_host_data(&self) -> bool {
        self.host_slot().is_set()
    }

    /* Parameters ***********************************************************/

    /// Fills the caller-supplied block from current engine state.
    pub fn get_params(&self, params: &mut CsoundParams) {
        let mut raw_params = raw::CSOUND_PARAMS::default();
        unsafe {
            raw::csoundGetParams(self.engine.csound, &mut raw_params);
        }
        params.fill_from_raw(&raw_params);
    }

    /// Pushes the full parameter block to the engine.
    ///
    /// There is no partial update: every field of `params` is written, so
    /// read the current block with [`Csound::get_params`] first unless the
    /// intent is to overwrite all of it.
    pub fn set_params(&self, params: &CsoundParams) {
        let mut raw_params = params.to_raw();
        unsafe {
            raw::csoundSetParams(self.engine.csound, &mut raw_params);
        }
    }

    /// Whether the engine prints debug messages. Reads the same underlying
    /// field as the `debug_mode` member of the parameter block.
    pub fn debug(&self) -> bool {
        unsafe { raw::csoundGetDebug(self.engine.csound) != 0 }
    }

    pub fn set_debug(&self, debug: bool) {
        unsafe {
            raw::csoundSetDebug(self.engine.csound, debug as c_int);
        }
    }

    /// The Csound message level (from 0 to 231).
    pub fn message_level(&self) -> u32 {
        unsafe { raw::csoundGetMessageLevel(self.engine.csound) as u32 }
    }

    pub fn set_message_level(&self, level: u32) {
        unsafe {
            raw::csoundSetMessageLevel(self.engine.csound, level as c_int);
        }
    }

    /* Compilation and performance ******************************************/

    /// Sets a single csound option (flag). Blank spaces are not allowed.
    pub fn set_option(&self, option: &str) -> Result<(), &'static str> {
        let op = marshal::str_to_cstring(option)?;
        unsafe {
            match raw::csoundSetOption(self.engine.csound, op.as_ptr()) {
                raw::CSOUND_SUCCESS => Ok(()),
                _ => Err("Option not valid"),
            }
        }
    }

    /// Compiles csound input files as directed by the supplied command-line
    /// arguments, but does not perform them. Cannot be called during
    /// performance; after a failed or finished performance call
    /// [`Csound::reset`] before compiling again.
    pub fn compile<T>(&self, args: &[T]) -> Result<(), &'static str>
    where
        T: AsRef<str>,
    {
        let (_arguments, args_raw) = Csound::collect_argv(args)?;
        unsafe {
            match raw::csoundCompile(
                self.engine.csound,
                args_raw.len() as c_int,
                args_raw.as_ptr(),
            ) {
                raw::CSOUND_SUCCESS => Ok(()),
                _ => Err("Can't compile the given arguments"),
            }
        }
    }

    /// Compiles a csound document (.csd) file, but does not perform it.
    pub fn compile_csd<T>(&self, csd: T) -> Result<(), &'static str>
    where
        T: AsRef<str>,
    {
        let path = marshal::str_to_cstring(csd)?;
        unsafe {
            match raw::csoundCompileCsd(self.engine.csound, path.as_ptr()) {
                raw::CSOUND_SUCCESS => Ok(()),
                _ => Err("Can't compile the csd file"),
            }
        }
    }

    /// Behaves like [`Csound::compile_csd`], reading the CSD content from a
    /// string instead of a file. Convenient for packaging the csd as part of
    /// an application.
    pub fn compile_csd_text<T>(&self, csd_text: T) -> Result<(), &'static str>
    where
        T: AsRef<str>,
    {
        let text = marshal::str_to_cstring(csd_text)?;
        unsafe {
            match raw::csoundCompileCsdText(self.engine.csound, text.as_ptr()) {
                raw::CSOUND_SUCCESS => Ok(()),
                _ => Err("Can't compile the csd text"),
            }
        }
    }

    /// Parses and compiles the given orchestra from an ASCII string, also
    /// evaluating any global space code (i-time only). Can be called during
    /// performance to compile a new orchestra.
    pub fn compile_orc<T>(&self, orc: T) -> Result<(), &'static str>
    where
        T: AsRef<str>,
    {
        let orc = marshal::str_to_cstring(orc)?;
        unsafe {
            match raw::csoundCompileOrc(self.engine.csound, orc.as_ptr()) {
                raw::CSOUND_SUCCESS => Ok(()),
                _ => Err("Can't compile the orchestra"),
            }
        }
    }

    /// Reads, preprocesses and loads a score from an ASCII string. Can be
    /// called repeatedly, with the new score events added to the currently
    /// scheduled ones.
    pub fn read_score(&self, score: &str) -> Result<(), &'static str> {
        let score = marshal::str_to_cstring(score)?;
        unsafe {
            if raw::csoundReadScore(self.engine.csound, score.as_ptr()) == raw::CSOUND_SUCCESS {
                Ok(())
            } else {
                Err("Can't read the score")
            }
        }
    }

    /// Prepares csound for performance. Normally called after compiling a
    /// csd file or an orc string; channel value access and audio/string
    /// channel creation expect a started engine.
    pub fn start(&self) -> Result<(), &'static str> {
        unsafe {
            if raw::csoundStart(self.engine.csound) == raw::CSOUND_SUCCESS {
                Ok(())
            } else {
                Err("Csound is already started, call reset() before starting again.")
            }
        }
    }

    /// Senses input events and performs audio output until the end of score
    /// is reached (positive return value), an error occurs (negative), or
    /// performance is stopped by calling [`Csound::stop`] from another
    /// thread (zero).
    pub fn perform(&self) -> i32 {
        unsafe { raw::csoundPerform(self.engine.csound) as i32 }
    }

    /// Senses input events and performs one control sample worth of audio.
    /// # Returns
    /// `false` during performance, `true` when the score is finished.
    pub fn perform_ksmps(&self) -> bool {
        unsafe { raw::csoundPerformKsmps(self.engine.csound) != 0 }
    }

    /// Stops the performance of this instance. It is not guaranteed that
    /// [`Csound::perform`] has already stopped when this function returns.
    pub fn stop(&self) {
        unsafe {
            raw::csoundStop(self.engine.csound);
        }
    }

    /// Resets all internal memory and state in preparation for a new
    /// performance.
    pub fn reset(&self) {
        unsafe {
            raw::csoundReset(self.engine.csound);
        }
    }

    /* Attributes ***********************************************************/

    /// The number of audio sample frames per second.
    pub fn sample_rate(&self) -> f64 {
        unsafe { raw::csoundGetSr(self.engine.csound) }
    }

    /// The number of control samples per second.
    pub fn control_rate(&self) -> f64 {
        unsafe { raw::csoundGetKr(self.engine.csound) }
    }

    /// The number of audio sample frames per control sample.
    pub fn ksmps(&self) -> u32 {
        unsafe { raw::csoundGetKsmps(self.engine.csound) }
    }

    /// The number of audio output channels, from the `nchnls` header
    /// variable of the compiled orchestra.
    pub fn output_channels(&self) -> u32 {
        unsafe { raw::csoundGetNchnls(self.engine.csound) }
    }

    /// The number of audio input channels (`nchnls_i`, falling back to
    /// `nchnls` when unset).
    pub fn input_channels(&self) -> u32 {
        unsafe { raw::csoundGetNchnlsInput(self.engine.csound) }
    }

    /* Module and device enumeration ****************************************/

    /// Returns an iterator over the engine's loaded audio/MIDI modules.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use csnd::Csound;
    /// let csound = Csound::new();
    /// for (index, module) in csound.modules().enumerate() {
    ///     println!("{:2}: {}\t{}", index, module.name, module.kind);
    /// }
    /// ```
    pub fn modules(&self) -> Modules {
        Modules::new(self)
    }

    /// Lists the available realtime audio devices for one direction.
    /// Meaningful after compilation; before it the engine reports an
    /// engine-defined (usually empty) list.
    pub fn audio_devices(&self, is_output: bool) -> Vec<AudioDevice> {
        unsafe {
            let count =
                raw::csoundGetAudioDevList(self.engine.csound, ptr::null_mut(), is_output as c_int);
            if count <= 0 {
                return Vec::new();
            }
            let mut list = vec![raw::CS_AUDIODEVICE::default(); count as usize];
            raw::csoundGetAudioDevList(self.engine.csound, list.as_mut_ptr(), is_output as c_int);
            list.iter()
                .map(|dev| AudioDevice::from_raw(dev, is_output))
                .collect()
        }
    }

    /// Lists the available realtime MIDI devices for one direction.
    pub fn midi_devices(&self, is_output: bool) -> Vec<MidiDevice> {
        unsafe {
            let count =
                raw::csoundGetMIDIDevList(self.engine.csound, ptr::null_mut(), is_output as c_int);
            if count <= 0 {
                return Vec::new();
            }
            let mut list = vec![raw::CS_MIDIDEVICE::default(); count as usize];
            raw::csoundGetMIDIDevList(self.engine.csound, list.as_mut_ptr(), is_output as c_int);
            list.iter()
                .map(|dev| MidiDevice::from_raw(dev, is_output))
                .collect()
        }
    }

    /* Channels *************************************************************/

    /// Takes a snapshot of the named-channel table.
    /// # Returns
    /// All channels known to the engine (possibly none), or the status code
    /// the engine reported. The native list is freed before returning, so
    /// the result is never a partially populated sequence.
    pub fn list_channels(&self) -> Result<Vec<ChannelInfo>, Status> {
        let mut ptr = ptr::null_mut() as *mut raw::controlChannelInfo_t;
        unsafe {
            let count = raw::csoundListChannels(self.engine.csound, &mut ptr);
            if count < 0 {
                return Err(Status::from(count));
            }
            let mut list = Vec::with_capacity(count as usize);
            for pos in 0..count as isize {
                list.push(ChannelInfo::from_raw(&*ptr.offset(pos)));
            }
            if count > 0 {
                raw::csoundDeleteChannelList(self.engine.csound, ptr);
            }
            Ok(list)
        }
    }

    /// Resolves a named channel slot of the given kind, creating it first if
    /// it does not exist yet.
    ///
    /// `channel_type` must combine exactly one data-type flag (control,
    /// audio or string) with at least one direction flag (input/output).
    /// Audio and string channels can only be created after compiling, since
    /// their storage size is not known until then; reading values expects a
    /// started engine. Violating these preconditions is engine-defined
    /// behavior, passed through unchanged.
    /// # Returns
    /// The channel pointer, or the status reported by the engine. If a
    /// channel with the same name but an incompatible type already exists,
    /// the error carries the existing channel's type.
    pub fn get_channel_ptr<'a>(
        &'a self,
        name: &str,
        channel_type: ControlChannelType,
    ) -> Result<ControlChannelPtr<'a>, Status> {
        let cname = marshal::str_to_cstring(name).map_err(|_| Status::CS_ERROR)?;
        let kind = ControlChannelType::from_bits(
            channel_type.bits() & ControlChannelType::CSOUND_CHANNEL_TYPE_MASK.bits(),
        )
        .ok_or(Status::CS_ERROR)?;
        let len: usize = match kind {
            ControlChannelType::CSOUND_CONTROL_CHANNEL => 1,
            ControlChannelType::CSOUND_AUDIO_CHANNEL => self.ksmps() as usize,
            _ => return Err(Status::CS_ERROR),
        };
        let mut channel_ptr = ptr::null_mut() as *mut f64;
        unsafe {
            match Status::from(raw::csoundGetChannelPtr(
                self.engine.csound,
                &mut channel_ptr,
                cname.as_ptr(),
                channel_type.bits() as c_int,
            )) {
                Status::CS_SUCCESS => Ok(ControlChannelPtr {
                    ptr: channel_ptr,
                    len,
                    channel_type: kind,
                    phantom: PhantomData,
                }),
                status => Err(status),
            }
        }
    }

    /// Reads the current value of a control channel.
    pub fn get_control_channel(&self, name: &str) -> Result<f64, Status> {
        let cname = marshal::str_to_cstring(name).map_err(|_| Status::CS_ERROR)?;
        let mut err: c_int = 0;
        let value =
            unsafe { raw::csoundGetControlChannel(self.engine.csound, cname.as_ptr(), &mut err) };
        match Status::from(err) {
            Status::CS_SUCCESS => Ok(value),
            status => Err(status),
        }
    }

    /// Sets the value of a control channel, creating the channel if it does
    /// not exist.
    pub fn set_control_channel(&self, name: &str, value: f64) {
        if let Ok(cname) = marshal::str_to_cstring(name) {
            unsafe {
                raw::csoundSetControlChannel(self.engine.csound, cname.as_ptr(), value);
            }
        }
    }

    /* Named GEN routines ***************************************************/

    /// Walks the engine's list of named GEN routines.
    pub fn named_gens(&self) -> Vec<NamedGen> {
        let mut gens = Vec::new();
        unsafe {
            let mut node = raw::csoundGetNamedGens(self.engine.csound);
            while !node.is_null() {
                if let Some(name) = marshal::ptr_to_string((*node).name) {
                    gens.push(NamedGen {
                        name,
                        num: (*node).genum as i32,
                    });
                }
                node = (*node).next;
            }
        }
        gens
    }

    /// # Returns
    /// The name length of the given GEN routine, or 0 if it is not a named
    /// one.
    pub fn is_named_gen(&self, gen: u32) -> usize {
        unsafe { raw::csoundIsNamedGEN(self.engine.csound, gen as c_int) as usize }
    }

    /// # Returns
    /// The name of the given GEN routine, or `None` if it does not exist or
    /// is not a named one.
    pub fn gen_name(&self, gen: u32) -> Option<String> {
        let len = self.is_named_gen(gen);
        if len == 0 {
            return None;
        }
        unsafe {
            let name = CString::from_vec_unchecked(vec![0u8; len]).into_raw();
            raw::csoundGetNamedGEN(self.engine.csound, gen as c_int, name, len as c_int);
            let name = CString::from_raw(name);
            name.to_str().ok().map(|s| s.to_owned())
        }
    }

    /* Utilities ************************************************************/

    /// Lists the names of the engine's bundled utilities.
    /// # Returns
    /// The complete ordered name list, or an error status; never a partial
    /// list. Each name resolves through [`Csound::utility_description`].
    pub fn list_utilities(&self) -> Result<Vec<String>, Status> {
        unsafe {
            let list = raw::csoundListUtilities(self.engine.csound);
            if list.is_null() {
                return Err(Status::CS_ERROR);
            }
            let mut names = Vec::new();
            let mut entry = list;
            while !(*entry).is_null() {
                if let Some(name) = marshal::ptr_to_string(*entry) {
                    names.push(name);
                }
                entry = entry.add(1);
            }
            raw::csoundDeleteUtilityList(self.engine.csound, list);
            Ok(names)
        }
    }

    /// # Returns
    /// The short description of the given utility, or `None` if the name is
    /// unknown.
    pub fn utility_description(&self, name: &str) -> Option<String> {
        let cname = marshal::str_to_cstring(name).ok()?;
        unsafe {
            marshal::ptr_to_string(raw::csoundGetUtilityDescription(
                self.engine.csound,
                cname.as_ptr(),
            ))
        }
    }

    /* Miscellaneous ********************************************************/

    /// Runs an external command via the native layer.
    ///
    /// The argument vector is passed through verbatim: no validation,
    /// quoting or sandboxing happens here, that is the embedding
    /// application's responsibility. With `no_wait` the call returns
    /// immediately; otherwise it blocks until the program exits and there is
    /// no way to interrupt it from this layer.
    /// # Returns
    /// The program's return value (or zero with `no_wait`), or an error if
    /// the command could not be spawned.
    pub fn run_command<T>(args: &[T], no_wait: bool) -> Result<i64, &'static str>
    where
        T: AsRef<str>,
    {
        let (_arguments, mut argv) = Csound::collect_argv(args)?;
        // csoundRunCommand takes an execv-style argv with no argc, so the
        // vector has to be null-terminated.
        argv.push(ptr::null());
        let ret = unsafe { raw::csoundRunCommand(argv.as_ptr(), no_wait as c_int) };
        if ret < 0 {
            Err("Can't run the command")
        } else {
            Ok(ret as i64)
        }
    }

    // Marshals a &str slice into CStrings plus the raw pointer vector that
    // borrows them. The CString vector must outlive every use of the
    // pointers.
    fn collect_argv<T>(args: &[T]) -> Result<(Vec<CString>, Vec<*const c_char>), &'static str>
    where
        T: AsRef<str>,
    {
        if args.is_empty() {
            return Err("Not enough arguments");
        }
        let arguments: Vec<CString> = args
            .iter()
            .map(|arg| CString::new(arg.as_ref()))
            .collect::<Result<_, _>>()
            .map_err(|_| "Invalid argument string")?;
        let argv = arguments.iter().map(|arg| arg.as_ptr()).collect();
        Ok((arguments, argv))
    }
}

impl Drop for Csound {
    fn drop(&mut self) {
        unsafe {
            raw::csoundStop(self.engine.csound);
            raw::csoundCleanup(self.engine.csound);
            let _ = Box::from_raw(raw::csoundGetHostData(self.engine.csound) as *mut HostData);
            raw::csoundDestroy(self.engine.csound);
        }
    }
}
