use fixed_bitvec::{BitVector, BitVectorError, word_count};

const DATA_BITS: usize = 24;
// one extra bit for even parity
const FRAME_BITS: usize = DATA_BITS + 1;

type Frame = BitVector<FRAME_BITS, { word_count(FRAME_BITS) }>;

fn encode(data: u32) -> Result<Frame, BitVectorError> {
    if data >> DATA_BITS != 0 {
        return Err(BitVectorError::Overflow {
            bits: DATA_BITS as u32,
        });
    }
    let mut frame = Frame::from_u64(u64::from(data)) << 1;
    let odd = frame.count() % 2 == 1;
    frame.set_to(0, odd)?;
    Ok(frame)
}

fn decode(frame: &Frame) -> Option<u32> {
    if frame.count() % 2 != 0 {
        return None;
    }
    (*frame >> 1).to_u32().ok()
}

fn main() -> Result<(), BitVectorError> {
    let mut frame = encode(0x00c0_ffee)?;
    println!("sent     {frame} ({} ones)", frame.count());
    println!("decoded  {:?}", decode(&frame).map(|data| format!("{data:#08x}")));

    frame.flip(13)?;
    println!("received {frame} ({} ones)", frame.count());
    println!("decoded  {:?}", decode(&frame));

    println!("too wide {:?}", encode(0x0100_0000).map(|frame| frame.to_string()));
    Ok(())
}
